use axum::{
    routing::get,
    Router,
    extract::{Query, State},
    Json,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;

use crate::error::{Result, AppError};
use crate::api::models::ViewsQuery;
use crate::extractor::ExtractionResult;
use crate::AppState;

pub const MISSING_URL_MESSAGE: &str = "Missing url parameter";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/views", get(views_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

// Extraction failures are still a 200; only a missing `url` is rejected.
async fn views_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ExtractionResult>> {
    let query = ViewsQuery::from_pairs(pairs);
    let url = query
        .page_url()
        .ok_or_else(|| AppError::MissingParameter(MISSING_URL_MESSAGE.to_string()))?;

    tracing::info!(
        timeout = ?state.config.fetch.timeout,
        "Processing request for URL: {}",
        url
    );
    let start_time = std::time::Instant::now();

    let result = state.extractor.extract(url).await;

    tracing::info!(
        success = result.is_success(),
        elapsed = ?start_time.elapsed(),
        "Finished request for URL: {}",
        url
    );

    Ok(Json(result))
}
