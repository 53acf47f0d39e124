//! Error types for the cache service API
//!
//! The cache core itself is total and never fails; errors exist only at the
//! HTTP boundary. A miss maps to 404 so the orchestration layer knows to
//! fall through to its LLM call.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Errors the HTTP surface can return.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No fresh cached response for the derived key
    #[error("Cache miss: {0}")]
    Miss(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Miss(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
