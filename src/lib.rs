//! Semcache - An intent-aware semantic response cache
//!
//! Sits in front of expensive LLM calls in a community-resource chat
//! application: messages are classified by intent, reduced to a normalized
//! keyword signature, and the computed responses are held in a bounded LRU
//! store with TTL tiers (long for resource lookups, short for conversation,
//! none for personalized content).

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
