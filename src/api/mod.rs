//! API Module
//!
//! HTTP handlers and routing for the relay's REST surface.
//!
//! # Endpoints
//! - `GET /api/search?q=` - Cached search results
//! - `GET /api/charts` - Cached top charts
//! - `GET /api/albums/:id` - Cached album lookup
//! - `GET /api/lyrics/:id` - Cached lyrics lookup
//! - `GET /stream?url=` - Range-aware audio stream relay
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
