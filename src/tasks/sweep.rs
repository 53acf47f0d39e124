//! Expired-Entry Sweep Task
//!
//! Background task that periodically purges stale cache entries.
//!
//! Lookups validate freshness themselves, so the sweep is not required for
//! correctness; it only reclaims memory held by entries nobody asks for
//! anymore.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Spawns a background task that periodically purges expired entries.
///
/// The task loops forever, sleeping for the given interval between sweeps.
/// The returned handle is used to abort the task during graceful shutdown.
pub fn spawn_sweep_task(
    cache: Arc<RwLock<ResponseCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "starting expired-entry sweep with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            if removed > 0 {
                info!("sweep removed {} expired entries", removed);
            } else {
                debug!("sweep found no expired entries");
            }
        }
    })
}
