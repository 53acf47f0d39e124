//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Cache Entry ==
/// A single cached response with its freshness metadata.
///
/// The value is opaque to the cache: whatever shape the chat layer produces
/// (content, resource list, citations) is stored and returned as-is.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response
    pub value: Value,
    /// When the entry was stored
    pub stored_at: Instant,
    /// How long the entry stays fresh
    pub ttl: Duration,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry, timestamped now.
    pub fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is stale exactly when its TTL has fully
    /// elapsed (`elapsed >= ttl`). A fresh lookup any time strictly before
    /// that is a hit.
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining freshness window, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.stored_at.elapsed())
    }
}
