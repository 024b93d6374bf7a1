use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::ClientError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ClientError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Everything that can go wrong between fetching a page and reading its view count.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to load page: {0}")]
    Status(u16),

    #[error("Data not found.")]
    DataNotFound,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid view count: {0}")]
    InvalidViewCount(String),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_maps_to_bad_request() {
        let response = AppError::MissingParameter("Missing url parameter".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn config_error_maps_to_internal_error() {
        let response = AppError::ConfigError("Invalid port".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_message_names_the_code() {
        assert_eq!(ExtractError::Status(404).to_string(), "Failed to load page: 404");
    }
}
