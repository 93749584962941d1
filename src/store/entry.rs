//! Store Entry Module
//!
//! Defines the structure for individual store entries with an absolute expiration.

use chrono::{DateTime, Utc};

use crate::store::StoredValue;

// == Store Entry ==
/// A single stored value plus its expiration instant.
#[derive(Clone)]
pub(crate) struct StoreEntry {
    /// The stored value
    pub(crate) value: StoredValue,
    /// Absolute instant after which the entry is treated as absent
    pub(crate) expires_at: DateTime<Utc>,
}

impl StoreEntry {
    // == Constructor ==
    /// Creates a new entry that expires at `expires_at`.
    pub(crate) fn new(value: StoredValue, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration instant.
    pub(crate) fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Same as [`is_expired`](Self::is_expired) against a fixed instant.
    pub(crate) fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl std::fmt::Debug for StoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreEntry")
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}
