//! Response Cache Store Module
//!
//! Bounded key-value store combining HashMap storage with recency tracking
//! and lazy TTL expiry. All operations are total: a miss is a normal
//! outcome, not an error, and `set` never fails (memory is bounded by
//! construction).

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, RecencyList, StatsSnapshot};

// == Response Cache ==
/// LRU-evicted, TTL-aware store for chat responses.
///
/// Invariants:
/// - `len() <= max_entries` after every `set`
/// - recency order: the least-recently-touched entry is always the first
///   eviction candidate
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Access-order tracker driving eviction
    recency: RecencyList,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Capacity bound
    max_entries: usize,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyList::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Get ==
    /// Looks up a response by key.
    ///
    /// A stale entry counts as a miss and is removed on the spot (lazy
    /// expiry; no background sweep is required for correctness). A fresh hit
    /// refreshes the entry's recency position.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired() {
            debug!(key, "entry expired, treating as miss");
            self.entries.remove(key);
            self.recency.forget(key);
            self.stats.record_miss();
            return None;
        }

        let value = entry.value.clone();
        self.recency.touch(key);
        self.stats.record_hit();
        Some(value)
    }

    // == Set ==
    /// Stores a response under a key.
    ///
    /// A zero TTL means "do not cache" (personalized content) and is a
    /// no-op. Inserting a new key at capacity first evicts the least
    /// recently used entry. Overwriting an existing key resets its
    /// timestamp and TTL and moves it to the most-recently-used position.
    pub fn set(&mut self, key: String, value: Value, ttl: Duration) {
        if ttl.is_zero() {
            debug!(key = key.as_str(), "zero ttl, skipping insert");
            return;
        }

        let is_new = !self.entries.contains_key(&key);
        if is_new && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.recency.pop_lru() {
                debug!(key = evicted.as_str(), "evicting least recently used entry");
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, ttl));
        self.recency.touch(&key);
    }

    // == Clear ==
    /// Empties the store and resets all counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
        self.stats.reset();
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of size, capacity and counters.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            size: self.entries.len(),
            max_size: self.max_entries,
            hits: self.stats.hits,
            misses: self.stats.misses,
            evictions: self.stats.evictions,
            hit_rate: self.stats.hit_rate(),
        }
    }

    // == Purge Expired ==
    /// Removes every stale entry. Returns the number removed.
    ///
    /// Optional hygiene: `get` already validates freshness, so this only
    /// reclaims memory held by entries nobody asks for anymore. Purged
    /// entries do not count as misses or evictions.
    pub fn purge_expired(&mut self) -> usize {
        let stale: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &stale {
            self.entries.remove(key);
            self.recency.forget(key);
        }

        stale.len()
    }

    // == Length ==
    /// Current number of entries, stale ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Max Entries ==
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
