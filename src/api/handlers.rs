//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. The handlers own
//! the key derivation and TTL tiering; callers only ever send raw message
//! text plus, on store, the computed response.

use std::sync::Arc;

use axum::{extract::State, Json};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{cache_key, Intent, ResponseCache, StatsSnapshot, TtlPolicy};
use crate::error::{ApiError, Result};
use crate::models::{
    ClearResponse, HealthResponse, LookupRequest, LookupResponse, StoreRequest, StoreResponse,
};

// == App State ==
/// Shared application state.
///
/// The cache is constructed once at the composition root and injected here;
/// a single lock guards the whole mapping plus the counters, held for the
/// duration of each operation.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// TTL tier durations
    pub ttl_policy: TtlPolicy,
}

impl AppState {
    /// Creates state around an existing cache with the given tier policy.
    pub fn new(cache: ResponseCache, ttl_policy: TtlPolicy) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            ttl_policy,
        }
    }

    /// Creates state from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(ResponseCache::new(config.max_entries), config.ttl_policy())
    }
}

/// Handler for POST /lookup
///
/// Derives the semantic key for the message and returns the cached response
/// if a fresh one exists. A miss returns 404; the caller then performs its
/// expensive computation and stores the result via POST /store.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Json(req): Json<LookupRequest>,
) -> Result<Json<LookupResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let intent = Intent::detect(&req.message);
    let key = cache_key(&req.message);

    let cached = {
        let mut cache = state.cache.write().await;
        cache.get(&key)
    };

    match cached {
        Some(response) => {
            debug!(key = key.as_str(), "cache hit");
            Ok(Json(LookupResponse::new(key, intent, response)))
        }
        None => {
            debug!(key = key.as_str(), "cache miss");
            Err(ApiError::Miss(key))
        }
    }
}

/// Handler for POST /store
///
/// Derives the key and TTL tier for the message and stores the response.
/// Personalized conversations get a zero TTL and are never inserted; the
/// response reports `stored: false` in that case.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let intent = Intent::detect(&req.message);
    let key = cache_key(&req.message);
    let ttl = state.ttl_policy.ttl_for(&req.message, req.personalized);

    {
        let mut cache = state.cache.write().await;
        cache.set(key.clone(), req.response, ttl);
    }

    Ok(Json(StoreResponse::new(key, intent, ttl.as_millis() as u64)))
}

/// Handler for GET /stats
///
/// Returns a read-only snapshot of size, capacity and counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsSnapshot> {
    let cache = state.cache.read().await;
    Json(cache.stats())
}

/// Handler for POST /clear
///
/// Administrative reset: empties the store and zeroes all counters.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    cache.clear();
    info!("cache cleared");

    Json(ClearResponse::new())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(ResponseCache::new(100), TtlPolicy::default())
    }

    #[tokio::test]
    async fn test_store_then_lookup_hit() {
        let state = test_state();

        let store = StoreRequest {
            message: "where can I find food downtown".to_string(),
            response: json!({"content": "try the pantry"}),
            personalized: false,
        };
        let stored = store_handler(State(state.clone()), Json(store)).await.unwrap();
        assert!(stored.stored);
        assert_eq!(stored.intent, Intent::Food);

        let lookup = LookupRequest {
            message: "where can I find food downtown".to_string(),
        };
        let found = lookup_handler(State(state), Json(lookup)).await.unwrap();
        assert_eq!(found.response, json!({"content": "try the pantry"}));
    }

    #[tokio::test]
    async fn test_lookup_miss_is_error() {
        let state = test_state();

        let lookup = LookupRequest {
            message: "where can I find food downtown".to_string(),
        };
        let result = lookup_handler(State(state), Json(lookup)).await;
        assert!(matches!(result, Err(ApiError::Miss(_))));
    }

    // Differently phrased queries with the same intent and keywords share
    // one entry; the collision is the point of semantic caching.
    #[tokio::test]
    async fn test_semantic_collision_across_phrasings() {
        let state = test_state();

        let store = StoreRequest {
            message: "I need food now".to_string(),
            response: json!("pantry info"),
            personalized: false,
        };
        store_handler(State(state.clone()), Json(store)).await.unwrap();

        let lookup = LookupRequest {
            message: "now food need".to_string(),
        };
        let found = lookup_handler(State(state), Json(lookup)).await.unwrap();
        assert_eq!(found.response, json!("pantry info"));
    }

    #[tokio::test]
    async fn test_personalized_store_never_replayed() {
        let state = test_state();

        let store = StoreRequest {
            message: "help me with my resume".to_string(),
            response: json!("personal draft"),
            personalized: true,
        };
        let stored = store_handler(State(state.clone()), Json(store)).await.unwrap();
        assert!(!stored.stored);
        assert_eq!(stored.ttl_ms, 0);

        let lookup = LookupRequest {
            message: "help me with my resume".to_string(),
        };
        let result = lookup_handler(State(state), Json(lookup)).await;
        assert!(matches!(result, Err(ApiError::Miss(_))));
    }

    #[tokio::test]
    async fn test_lookup_empty_message_rejected() {
        let state = test_state();

        let lookup = LookupRequest {
            message: String::new(),
        };
        let result = lookup_handler(State(state), Json(lookup)).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_and_clear_handlers() {
        let state = test_state();

        let store = StoreRequest {
            message: "bus schedule".to_string(),
            response: json!("route 12"),
            personalized: false,
        };
        store_handler(State(state.clone()), Json(store)).await.unwrap();

        let stats = stats_handler(State(state.clone())).await;
        assert_eq!(stats.size, 1);
        assert_eq!(stats.max_size, 100);

        clear_handler(State(state.clone())).await;

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hit_rate, "0%");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
