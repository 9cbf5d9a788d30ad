//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//! Lazy removal on lookup handles hot keys; the sweep reclaims keys
//! that are never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps expired cache entries.
///
/// The task loops forever, sleeping `cleanup_interval_secs` between
/// sweeps and taking the write lock only for the sweep itself. The
/// returned handle is aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(CacheStore::new(100)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard
                .set("album:stale".to_string(), json!("v"), 1)
                .unwrap();
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Check raw length rather than get(), so lazy removal on lookup
        // cannot mask a sweep that never ran.
        {
            let cache_guard = cache.read().await;
            assert!(
                cache_guard.is_empty(),
                "Expired entry should have been swept"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_preserves_live_entries() {
        let cache = Arc::new(RwLock::new(CacheStore::new(100)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard
                .set("lyrics:keep".to_string(), json!("text"), 3600)
                .unwrap();
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert_eq!(cache_guard.get("lyrics:keep"), Some(json!("text")));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = Arc::new(RwLock::new(CacheStore::new(100)));

        let handle = spawn_cleanup_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
