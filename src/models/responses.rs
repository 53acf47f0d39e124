//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::Intent;

/// Response body for a cache hit (POST /lookup)
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    /// The derived cache key
    pub key: String,
    /// The detected intent category
    pub intent: Intent,
    /// The cached response object
    pub response: Value,
}

impl LookupResponse {
    pub fn new(key: impl Into<String>, intent: Intent, response: Value) -> Self {
        Self {
            key: key.into(),
            intent,
            response,
        }
    }
}

/// Response body for the store operation (POST /store)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// The derived cache key
    pub key: String,
    /// The detected intent category
    pub intent: Intent,
    /// TTL assigned to the entry, in milliseconds
    pub ttl_ms: u64,
    /// False when the entry was excluded from caching (personalized mode)
    pub stored: bool,
}

impl StoreResponse {
    pub fn new(key: impl Into<String>, intent: Intent, ttl_ms: u64) -> Self {
        Self {
            key: key.into(),
            intent,
            ttl_ms,
            stored: ttl_ms > 0,
        }
    }
}

/// Response body for the clear operation (POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Confirmation message
    pub message: String,
}

impl ClearResponse {
    pub fn new() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status, always "healthy" when the service can answer
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body, shared by all failing endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
