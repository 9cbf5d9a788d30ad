//! API Routes
//!
//! Configures the Axum router with all relay endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    album_handler, charts_handler, health_handler, lyrics_handler, search_handler, stats_handler,
    AppState,
};
use crate::proxy::stream_handler;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/search?q=` - Cached search results
/// - `GET /api/charts` - Cached top charts
/// - `GET /api/albums/:id` - Cached album lookup
/// - `GET /api/lyrics/:id` - Cached lyrics lookup
/// - `GET /stream?url=` - Range-aware audio stream relay
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/search", get(search_handler))
        .route("/api/charts", get(charts_handler))
        .route("/api/albums/:id", get(album_handler))
        .route("/api/lyrics/:id", get(lyrics_handler))
        .route("/stream", get(stream_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
