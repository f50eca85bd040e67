//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use compass_core::CompassError;

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error type for consistent error responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request - invalid input.
    #[error("{0}")]
    BadRequest(String),

    /// Extraction is not configured.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// The extraction pipeline failed.
    #[error("{0}")]
    Extraction(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Extraction(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));
        (status, body).into_response()
    }
}

impl From<CompassError> for ApiError {
    fn from(err: CompassError) -> Self {
        let message = err.user_message();
        match err {
            CompassError::EmptyInput => ApiError::BadRequest(message),
            CompassError::Configuration(_) => ApiError::ServiceUnavailable(message),
            _ => ApiError::Extraction(message),
        }
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(err: handlebars::RenderError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
