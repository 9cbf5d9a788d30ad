//! Audio Relay - caching and stream relay for a music streaming backend
//!
//! Provides an in-memory TTL+LRU cache in front of an upstream
//! music-metadata API, and a range-aware audio stream relay.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
