//! API error handling
//!
//! The client-facing contract is deliberately flat: every failure inside
//! the route or info flow answers `500` with `{ "error": message }`. No
//! structured error codes are distinguished to the client.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// A dependency of the request flow failed; the message is shown to
    /// the client as-is
    #[error("{0}")]
    Upstream(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Internal(msg) => Self::Internal(msg),
            other => Self::Upstream(other.to_string()),
        }
    }
}
