//! Cache Statistics Module
//!
//! Tracks hits, misses and evictions, and produces read-only snapshots.

use serde::Serialize;

// == Cache Stats ==
/// Running counters, monotonically incrementing until `reset`.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that found nothing, or only a stale entry
    pub misses: u64,
    /// Entries removed to make room under the capacity bound
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // == Hit Rate ==
    /// Hit rate as a percentage string with one decimal, e.g. `"66.7%"`.
    ///
    /// Returns `"0%"` when no lookups have been recorded yet.
    pub fn hit_rate(&self) -> String {
        let total = self.hits + self.misses;
        if total == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", self.hits as f64 / total as f64 * 100.0)
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time view of the cache, as returned by `ResponseCache::stats`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Current number of entries
    pub size: usize,
    /// Capacity bound
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Formatted percentage, `"0%"` before any lookup
    pub hit_rate: String,
}
