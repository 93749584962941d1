//! Memory Store Module
//!
//! Default `Store` implementation: a HashMap behind a RwLock, with lazy expiry
//! on lookup and an explicit sweep for the background cleanup task.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::store::{Store, StoreEntry, StoredValue};

// == Memory Store ==
/// Thread-safe in-memory store with absolute-time expiration.
///
/// There is no capacity limit and no eviction policy; entries leave the map
/// only when removed or once they have expired.
#[derive(Debug)]
pub struct MemoryStore {
    /// Store name, used in log output
    name: String,
    /// Key-value storage
    entries: RwLock<HashMap<String, StoreEntry>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store named "default".
    pub fn new() -> Self {
        Self::with_name(Config::default().name)
    }

    /// Creates an empty store with the given name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an empty store from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_name(config.name.clone())
    }

    /// Returns the store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> Result<usize> {
        let now = Utc::now();
        let mut entries = self.write()?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        Ok(before - entries.len())
    }

    // == Length ==
    /// Returns the number of entries held, including expired ones not yet purged.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, StoreEntry>>> {
        self.entries
            .read()
            .map_err(|_| CacheError::Internal(format!("store '{}' lock poisoned", self.name)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, StoreEntry>>> {
        self.entries
            .write()
            .map_err(|_| CacheError::Internal(format!("store '{}' lock poisoned", self.name)))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn set(&self, key: &str, value: StoredValue, expires_at: DateTime<Utc>) -> Result<()> {
        let mut entries = self.write()?;
        entries.insert(key.to_string(), StoreEntry::new(value, expires_at));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<StoredValue>> {
        {
            let entries = self.read()?;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // Expired: drop it, unless a writer replaced it in between
        let mut entries = self.write()?;
        if entries.get(key).is_some_and(StoreEntry::is_expired) {
            entries.remove(key);
            trace!(store = %self.name, key, "dropped expired entry on lookup");
            return Ok(None);
        }
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write()?.remove(key);
        Ok(())
    }

    /// Atomic: the liveness check and the write happen under one write lock.
    fn insert_if_absent(
        &self,
        key: &str,
        value: StoredValue,
        expires_at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut entries = self.write()?;
        if entries.get(key).is_some_and(|entry| !entry.is_expired()) {
            return Ok(false);
        }
        entries.insert(key.to_string(), StoreEntry::new(value, expires_at));
        Ok(true)
    }
}
