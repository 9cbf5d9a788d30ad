//! API Handlers
//!
//! HTTP request handlers for the cached-JSON endpoints. Each handler
//! consults the cache first and only goes upstream on a miss.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheStore, CacheTtl, MAX_KEY_LENGTH};
use crate::config::Config;
use crate::error::{RelayError, Result};
use crate::models::{ApiResponse, HealthResponse, SearchParams, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the cache store behind `Arc<RwLock<>>` plus the upstream HTTP
/// client. Constructed once at startup and injected through the router,
/// so tests get an isolated instance per router.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
    /// Client for upstream fetches (metadata API and stream relay)
    pub http: reqwest::Client,
    /// Base URL of the upstream music-metadata API, no trailing slash
    pub upstream_api_url: String,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: CacheStore, http: reqwest::Client, upstream_api_url: String) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            http,
            upstream_api_url,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the shared reqwest client with the configured connect
    /// timeout so a dead upstream cannot pin handlers indefinitely.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(config.upstream_timeout))
            .build()
            .map_err(|err| RelayError::Internal(err.to_string()))?;

        Ok(Self::new(
            CacheStore::new(config.max_entries),
            http,
            config.upstream_api_url.clone(),
        ))
    }
}

// == Cached Fetch ==
/// Cache-through lookup: returns the cached payload for `key`, or
/// fetches `path` from the upstream API, stores it under `key` with the
/// given TTL, and returns it.
///
/// Concurrent misses for the same key may each fetch and store; the
/// last completed write wins wholesale. The cache lock is never held
/// across the upstream await.
async fn cached_fetch(
    state: &AppState,
    key: String,
    path: String,
    query: &[(&str, &str)],
    ttl: CacheTtl,
) -> Result<Json<ApiResponse>> {
    // Reject unusable keys before the cache lookup, so an oversized
    // identifier fails fast instead of after a wasted upstream fetch.
    if key.len() > MAX_KEY_LENGTH {
        return Err(RelayError::InvalidRequest(format!(
            "Identifier too long for cache key ({} bytes)",
            key.len()
        )));
    }

    if let Some(data) = state.cache.write().await.get(&key) {
        debug!(%key, "serving from cache");
        return Ok(Json(ApiResponse::hit(data)));
    }

    let url = format!("{}{}", state.upstream_api_url, path);
    debug!(%key, %url, "cache miss, fetching upstream");

    let response = state
        .http
        .get(&url)
        .query(query)
        .send()
        .await
        .map_err(|err| RelayError::UpstreamUnavailable {
            status: None,
            message: format!("Upstream fetch failed: {err}"),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::upstream_status(status));
    }

    let data: Value = response.json().await.map_err(RelayError::upstream)?;

    state
        .cache
        .write()
        .await
        .set(key, data.clone(), ttl.as_secs())?;

    Ok(Json(ApiResponse::fetched(data)))
}

/// Handler for GET /api/search?q=
///
/// Search results are moderately volatile and get the medium TTL.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse>> {
    if let Some(error_msg) = params.validate() {
        return Err(RelayError::InvalidRequest(error_msg));
    }

    cached_fetch(
        &state,
        format!("search:{}", params.q),
        "/search".to_string(),
        &[("q", params.q.as_str())],
        CacheTtl::Search,
    )
    .await
}

/// Handler for GET /api/charts
///
/// Top charts change rarely and get the long TTL.
pub async fn charts_handler(State(state): State<AppState>) -> Result<Json<ApiResponse>> {
    cached_fetch(
        &state,
        "charts".to_string(),
        "/charts".to_string(),
        &[],
        CacheTtl::Charts,
    )
    .await
}

/// Handler for GET /api/albums/:id
///
/// Album lookups are the volatile fallback path and get the short TTL.
pub async fn album_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>> {
    cached_fetch(
        &state,
        format!("album:{id}"),
        format!("/albums/{id}"),
        &[],
        CacheTtl::Volatile,
    )
    .await
}

/// Handler for GET /api/lyrics/:id
///
/// Lyrics for a given track never change, so they get the longest TTL.
pub async fn lyrics_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>> {
    cached_fetch(
        &state,
        format!("lyrics:{id}"),
        format!("/lyrics/{id}"),
        &[],
        CacheTtl::Lyrics,
    )
    .await
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
