//! Response DTOs for the relay API
//!
//! Defines the structure of outgoing HTTP response bodies. Error
//! bodies are produced by the `RelayError` response mapping.

use serde::Serialize;
use serde_json::Value;

/// Envelope for cached-JSON endpoints.
///
/// `data` carries the upstream payload verbatim; `cached` reports
/// whether it was served from the cache or fetched on this request.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Value,
    pub cached: bool,
}

impl ApiResponse {
    /// Wraps a payload served from the cache.
    pub fn hit(data: Value) -> Self {
        Self {
            success: true,
            data,
            cached: true,
        }
    }

    /// Wraps a payload fetched from upstream on this request.
    pub fn fetched(data: Value) -> Self {
        Self {
            success: true,
            data,
            cached: false,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, evictions: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            evictions,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
