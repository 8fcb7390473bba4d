//! Error types for the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::provider::ProviderError;

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error taxonomy.
///
/// Every variant maps to exactly one HTTP status and one JSON body shape.
/// No variant is fatal to the process; each request fails independently.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - missing or empty input text
    BadRequest(String),

    /// Not found (404) - no interaction recorded yet
    NotFound(String),

    /// Provider failure (500) - any failure from the text-generation call
    Provider(ProviderError),

    /// Internal server error (500)
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            Self::NotFound(msg) => write!(f, "Not Found: {}", msg),
            Self::Provider(err) => write!(f, "Provider Error: {}", err),
            Self::Internal(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        Self::Provider(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client-facing body shapes are part of the endpoint contract:
        // 400/500 carry {"error": ...}, 404 carries {"message": ...}.
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            Self::Provider(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": err.to_string() }),
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
        };

        (status, Json(body)).into_response()
    }
}
