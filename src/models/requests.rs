//! Request DTOs for the relay API
//!
//! Query-string parameters accepted by the route handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// The search query
    pub q: String,
}

impl SearchParams {
    /// Returns an error message if the query is unusable, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.q.trim().is_empty() {
            return Some("Search query cannot be empty".to_string());
        }
        None
    }
}

/// Query parameters for `GET /stream`.
///
/// `url` is required; it stays optional here so a missing parameter
/// surfaces as the service's own error envelope instead of the
/// extractor's plain-text rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamParams {
    /// Absolute upstream URL to relay; scheme-validated by the handler
    pub url: Option<String>,
}
