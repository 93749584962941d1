//! Store Trait
//!
//! The contract between the cache façade and whatever actually holds entries.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::store::StoredValue;

/// A key/value container with absolute-time expiration.
///
/// Implementations must treat an entry whose `expires_at` has passed as
/// absent. Thread-safety is the implementation's job; the cache adds no
/// locking of its own.
pub trait Store: Send + Sync {
    /// Stores `value` under `key`, replacing any existing entry.
    fn set(&self, key: &str, value: StoredValue, expires_at: DateTime<Utc>) -> Result<()>;

    /// Returns the live value for `key`, or `None` if absent or expired.
    fn get(&self, key: &str) -> Result<Option<StoredValue>>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Stores `value` only if no live entry exists for `key`.
    ///
    /// Returns `true` when the value was written. The provided body is a
    /// lookup followed by a write and is NOT atomic: two concurrent callers
    /// can both observe the key as absent and both write, the later one
    /// winning. Stores that can check and write under one lock should
    /// override it.
    fn insert_if_absent(
        &self,
        key: &str,
        value: StoredValue,
        expires_at: DateTime<Utc>,
    ) -> Result<bool> {
        if self.get(key)?.is_some() {
            return Ok(false);
        }
        self.set(key, value, expires_at)?;
        Ok(true)
    }
}
