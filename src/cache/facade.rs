//! Cache Façade Module
//!
//! Validates keys and TTLs, turns relative TTLs into absolute expiration
//! instants, and enforces the add/get/remove contracts on top of a `Store`.

use std::any::{type_name, Any};
use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use tracing::{debug, trace};

use crate::cache::stats::{CacheStats, StatsCounters};
use crate::error::{CacheError, Result};
use crate::store::{MemoryStore, Store, StoredValue};

// == Cache ==
/// Typed object cache over an injected [`Store`].
///
/// Every entry is added with a TTL in seconds, and a live key can only be
/// added once: replace a value by removing it first.
///
/// ```
/// use object_cache::Cache;
///
/// let cache = Cache::in_memory();
/// cache.add("Key", "Object".to_string(), 100).unwrap();
/// assert_eq!(cache.get::<String>("Key").unwrap(), "Object");
/// ```
pub struct Cache {
    /// Backing store, shared with whoever injected it
    store: Arc<dyn Store>,
    /// Operation counters
    stats: StatsCounters,
}

impl Cache {
    // == Constructors ==
    /// Creates a cache over the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            stats: StatsCounters::default(),
        }
    }

    /// Creates a cache over a fresh, privately owned [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Starts a [`CacheBuilder`].
    pub fn builder() -> CacheBuilder {
        CacheBuilder::default()
    }

    // == Add ==
    /// Adds `value` under `key` for `ttl_seconds` seconds from now.
    ///
    /// # Errors
    /// - `InvalidArgument` if `key` is empty
    /// - `OutOfRange` if `ttl_seconds <= 0` or the expiration instant overflows
    /// - `AlreadyExists` if a live entry is already stored under `key`
    pub fn add<T>(&self, key: &str, value: T, ttl_seconds: i64) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        validate_key(key)?;
        let expires_at = expiration_from_now(ttl_seconds)?;

        let value: StoredValue = Arc::new(value);
        if !self.store.insert_if_absent(key, value, expires_at)? {
            self.stats.record_rejection();
            debug!(key, "add rejected: key already exists");
            return Err(CacheError::AlreadyExists(key.to_string()));
        }

        self.stats.record_insertion();
        debug!(key, %expires_at, "added entry");
        Ok(())
    }

    // == Get ==
    /// Returns a clone of the value stored under `key`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `key` is empty
    /// - `NotFound` if no live entry exists
    /// - `TypeMismatch` if the entry does not hold a `T`
    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: Any + Clone,
    {
        let value = self.lookup(key)?;
        match value.downcast_ref::<T>() {
            Some(typed) => {
                self.stats.record_hit();
                Ok(typed.clone())
            }
            None => Err(type_mismatch::<T>(key)),
        }
    }

    /// Like [`get`](Self::get) but hands back the shared value without
    /// cloning it, for payloads that are not `Clone`.
    pub fn get_shared<T>(&self, key: &str) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let value = self.lookup(key)?;
        match value.downcast::<T>() {
            Ok(typed) => {
                self.stats.record_hit();
                Ok(typed)
            }
            Err(_) => Err(type_mismatch::<T>(key)),
        }
    }

    // == Remove ==
    /// Removes the entry stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    /// - `InvalidArgument` if `key` is empty
    pub fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;

        if self.exists(key)? {
            self.store.remove(key)?;
            self.stats.record_removal();
            debug!(key, "removed entry");
        }
        Ok(())
    }

    // == Stats ==
    /// Returns a snapshot of the operation counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.store.get(key)?.is_some())
    }

    fn lookup(&self, key: &str) -> Result<StoredValue> {
        validate_key(key)?;

        match self.store.get(key)? {
            Some(value) => Ok(value),
            None => {
                self.stats.record_miss();
                trace!(key, "lookup miss");
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}

// == Cache Builder ==
/// Builds a [`Cache`]; a store must be supplied.
#[derive(Default)]
pub struct CacheBuilder {
    store: Option<Arc<dyn Store>>,
}

impl CacheBuilder {
    /// Sets the backing store.
    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the cache.
    ///
    /// # Errors
    /// - `InvalidArgument` if no store was supplied
    pub fn build(self) -> Result<Cache> {
        self.store
            .map(Cache::new)
            .ok_or_else(|| CacheError::InvalidArgument("store is required".to_string()))
    }
}

// == Validation ==
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidArgument("key cannot be empty".to_string()));
    }
    Ok(())
}

/// Converts a relative TTL into an absolute instant.
fn expiration_from_now(ttl_seconds: i64) -> Result<DateTime<Utc>> {
    if ttl_seconds <= 0 {
        return Err(CacheError::OutOfRange(format!(
            "ttl_seconds must be positive, got {}",
            ttl_seconds
        )));
    }

    ChronoDuration::try_seconds(ttl_seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .ok_or_else(|| {
            CacheError::OutOfRange(format!(
                "ttl_seconds {} overflows the expiration instant",
                ttl_seconds
            ))
        })
}

fn type_mismatch<T>(key: &str) -> CacheError {
    CacheError::TypeMismatch(format!(
        "value under '{}' is not a {}",
        key,
        type_name::<T>()
    ))
}
