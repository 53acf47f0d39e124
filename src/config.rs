//! Configuration Module
//!
//! Loads service configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{
    TtlPolicy, DEFAULT_GENERAL_TTL, DEFAULT_MAX_ENTRIES, DEFAULT_RESOURCE_TTL,
};

/// Service configuration.
///
/// All values can be set via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached responses
    pub max_entries: usize,
    /// TTL in seconds for resource-seeking queries
    pub resource_ttl_secs: u64,
    /// TTL in seconds for general/conversational queries
    pub general_ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between expired-entry sweeps
    pub sweep_interval_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cached responses (default: 500)
    /// - `RESOURCE_TTL_SECS` - Long-tier TTL in seconds (default: 3600)
    /// - `GENERAL_TTL_SECS` - Short-tier TTL in seconds (default: 1800)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
            resource_ttl_secs: env::var("RESOURCE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RESOURCE_TTL.as_secs()),
            general_ttl_secs: env::var("GENERAL_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_GENERAL_TTL.as_secs()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Builds the TTL tier policy from the configured durations.
    pub fn ttl_policy(&self) -> TtlPolicy {
        TtlPolicy {
            resource: Duration::from_secs(self.resource_ttl_secs),
            general: Duration::from_secs(self.general_ttl_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            resource_ttl_secs: DEFAULT_RESOURCE_TTL.as_secs(),
            general_ttl_secs: DEFAULT_GENERAL_TTL.as_secs(),
            server_port: 3000,
            sweep_interval_secs: 60,
        }
    }
}
