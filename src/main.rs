use tokio::net::TcpListener;
use video_view_counter::{
    config::Config,
    api::routes::create_router,
    telemetry::init_tracing,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()?;
    let server_addr = config.server_addr;
    tracing::info!(
        timeout = ?config.fetch.timeout,
        user_agent = %config.fetch.user_agent,
        "Starting server on {}",
        server_addr
    );

    let app_state = AppState::new(config)?;
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
