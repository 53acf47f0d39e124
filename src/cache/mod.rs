//! Semantic Cache Module
//!
//! Intent-aware response caching: messages are classified into topic
//! categories, reduced to a normalized keyword signature, and stored in a
//! bounded LRU map with per-entry TTL.

mod entry;
mod intent;
mod key;
mod lru;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use intent::Intent;
pub use key::cache_key;
pub use lru::RecencyList;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::ResponseCache;
pub use ttl::{TtlPolicy, DEFAULT_GENERAL_TTL, DEFAULT_RESOURCE_TTL};

// == Public Constants ==
/// Default capacity bound for the response cache.
pub const DEFAULT_MAX_ENTRIES: usize = 500;
