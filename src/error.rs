//! Error types for the relay service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Relay Error Enum ==
/// Unified error type for the relay service.
///
/// Cache misses are not represented here: absence is a normal lookup
/// outcome, not a failure.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Malformed or disallowed input; never retried
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream fetch failed, timed out, or returned an error status.
    /// Retry, if any, is the caller's responsibility.
    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable {
        /// Upstream HTTP status, when one was received
        status: Option<StatusCode>,
        message: String,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    // == Upstream Constructor ==
    /// Builds an upstream failure from a transport-level error.
    pub fn upstream(err: reqwest::Error) -> Self {
        Self::UpstreamUnavailable {
            status: err.status(),
            message: err.to_string(),
        }
    }

    /// Builds an upstream failure from an HTTP error status.
    pub fn upstream_status(status: StatusCode) -> Self {
        Self::UpstreamUnavailable {
            status: Some(status),
            message: format!("Upstream returned {}", status),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Relay the upstream's own error status when one exists so
            // the client can distinguish a missing track from an outage.
            RelayError::UpstreamUnavailable { status, .. } => (
                status
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                self.to_string(),
            ),
            RelayError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the relay service.
pub type Result<T> = std::result::Result<T, RelayError>;
