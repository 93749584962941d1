//! TTL Cleanup Task
//!
//! Background task that periodically removes expired entries from a memory store.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::store::MemoryStore;

/// Spawns a background task that periodically purges expired store entries.
///
/// Lookups already treat expired entries as absent; the sweep only reclaims
/// memory held by entries nobody reads again. Must be called from inside a
/// tokio runtime.
///
/// # Arguments
/// * `store` - Shared reference to the memory store
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop the sweeps.
///
/// # Example
/// ```ignore
/// let store = Arc::new(MemoryStore::new());
/// let cleanup_handle = spawn_cleanup_task(store.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(store: Arc<MemoryStore>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            store = store.name(),
            "Starting TTL cleanup task with interval of {} seconds", cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            match store.purge_expired() {
                Ok(0) => debug!(store = store.name(), "TTL cleanup: no expired entries found"),
                Ok(removed) => {
                    info!(store = store.name(), "TTL cleanup: removed {} expired entries", removed)
                }
                Err(e) => warn!(store = store.name(), error = %e, "TTL cleanup failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;
    use crate::store::Store;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let store = Arc::new(MemoryStore::new());
        let cache = Cache::new(store.clone());

        cache.add("expire_soon", "value".to_string(), 1).unwrap();

        let handle = spawn_cleanup_task(store.clone(), 1);

        // Wait for entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Purged without any lookup touching it
        assert!(store.is_empty().unwrap(), "Expired entry should have been cleaned up");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let store = Arc::new(MemoryStore::new());
        let cache = Cache::new(store.clone());

        cache.add("long_lived", "value".to_string(), 3600).unwrap();

        let handle = spawn_cleanup_task(store.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(store.len().unwrap(), 1);
        assert!(store.get("long_lived").unwrap().is_some());
        assert_eq!(cache.get::<String>("long_lived").unwrap(), "value");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let store = Arc::new(MemoryStore::new());

        let handle = spawn_cleanup_task(store, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
