//! Cache Store Module
//!
//! In-memory key/value engine combining HashMap storage with LRU
//! eviction and per-entry TTL expiry.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH};
use crate::error::{RelayError, Result};

// == Cache Store ==
/// Process-wide cache mapping namespaced string keys to JSON payloads.
///
/// Keys carry no structure beyond exact string equality; handlers
/// namespace them as `"<resource-kind>:<identifier>"`. A lookup never
/// returns an entry at or past its expiry instant.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore bounded at `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, expiring `ttl_seconds`
    /// from now.
    ///
    /// Overwriting resets both value and expiry; there is no merge. At
    /// capacity the least recently used entry is evicted to make room.
    pub fn set(&mut self, key: String, value: Value, ttl_seconds: u64) -> Result<()> {
        if key.is_empty() {
            return Err(RelayError::InvalidRequest(
                "Cache key cannot be empty".to_string(),
            ));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(RelayError::InvalidRequest(format!(
                "Cache key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if ttl_seconds == 0 {
            return Err(RelayError::InvalidRequest(
                "TTL must be a positive number of seconds".to_string(),
            ));
        }

        let is_overwrite = self.entries.contains_key(&key);

        // Overwrites reuse the existing slot, so only fresh inserts can
        // push the store past capacity.
        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        let entry = CacheEntry::new(value, ttl_seconds);
        self.entries.insert(key.clone(), entry);
        self.lru.touch(&key);

        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Looks up a key, returning the payload if present and not expired.
    ///
    /// Absence is the normal miss outcome, not an error. An expired
    /// entry is removed on the way out and counts as a miss.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key, returning whether one existed.
    ///
    /// Route handlers never delete; this exists for tests and manual
    /// invalidation.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Drops every entry, leaving counters intact.
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru = LruTracker::new();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns a snapshot of current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
