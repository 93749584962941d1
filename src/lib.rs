//! Object Cache - A typed in-memory object cache
//!
//! Adds values under string keys with a TTL in seconds, retrieves them by
//! type, and removes them, on top of any [`Store`] implementation.
//!
//! ```
//! use std::sync::Arc;
//! use object_cache::{Cache, CacheError, MemoryStore};
//!
//! let store = Arc::new(MemoryStore::with_name("sessions"));
//! let cache = Cache::new(store.clone());
//!
//! cache.add("user:1", 42u64, 30).unwrap();
//! assert_eq!(cache.get::<u64>("user:1").unwrap(), 42);
//! assert!(matches!(cache.add("user:1", 7u64, 30), Err(CacheError::AlreadyExists(_))));
//!
//! cache.remove("user:1").unwrap();
//! assert!(store.is_empty().unwrap());
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod store;
pub mod tasks;

pub use cache::{Cache, CacheBuilder, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
pub use store::{MemoryStore, Store, StoredValue};
pub use tasks::spawn_cleanup_task;
