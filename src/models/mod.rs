//! Request and Response models for the cache service API
//!
//! DTOs for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{LookupRequest, StoreRequest};
pub use responses::{
    ClearResponse, ErrorResponse, HealthResponse, LookupResponse, StoreResponse,
};
