//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `POST /lookup` - Look up a cached response for a message
//! - `POST /store` - Store a computed response for a message
//! - `GET /stats` - Cache statistics snapshot
//! - `POST /clear` - Administrative reset
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
