//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Longest accepted user message, matching the chat layer's own limit.
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Request body for the lookup operation (POST /lookup)
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    /// Raw user message; the cache key is derived from it
    pub message: String,
}

impl LookupRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_message(&self.message)
    }
}

/// Request body for the store operation (POST /store)
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// Raw user message the response answers
    pub message: String,
    /// The computed response, opaque to the cache
    pub response: Value,
    /// True for personalized conversations that must never be cached
    #[serde(default)]
    pub personalized: bool,
}

impl StoreRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        validate_message(&self.message)
    }
}

fn validate_message(message: &str) -> Option<String> {
    if message.is_empty() {
        return Some("Message is required".to_string());
    }
    if message.len() > MAX_MESSAGE_LENGTH {
        return Some("Message too long".to_string());
    }
    None
}
