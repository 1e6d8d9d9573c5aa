//! HTTP error mapping
//!
//! Client mistakes map to 4xx with a JSON `{"error": ...}` body; anything
//! else the engine reports is a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// Errors surfaced by request handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body was not JSON, or not a student object
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Path segment was not an integer id
    #[error("invalid student id: {0:?}")]
    InvalidId(String),

    /// Error reported by the store
    #[error(transparent)]
    Roster(#[from] roster_core::Error),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Roster(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Roster(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Roster(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
