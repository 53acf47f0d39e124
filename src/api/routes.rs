//! API Routes
//!
//! Configures the axum router with all cache service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, health_handler, lookup_handler, stats_handler, store_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /lookup` - Look up a cached response for a message
/// - `POST /store` - Store a computed response for a message
/// - `GET /stats` - Cache statistics snapshot
/// - `POST /clear` - Administrative reset
/// - `GET /health` - Health check
///
/// # Middleware
/// - CORS: allows any origin (the chat backend fronts this service)
/// - Tracing: logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/lookup", post(lookup_handler))
        .route("/store", post(store_handler))
        .route("/stats", get(stats_handler))
        .route("/clear", post(clear_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
