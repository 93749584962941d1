//! Error types for the object cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache and store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Empty key, or a cache built without a store
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Argument outside its accepted range (non-positive or overflowing TTL)
    #[error("Argument out of range: {0}")]
    OutOfRange(String),

    /// A live entry already exists under the key
    #[error("Key already exists: {0}")]
    AlreadyExists(String),

    /// Key is absent or expired
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Stored value is not of the requested type
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Failure inside the backing store
    #[error("Internal error: {0}")]
    Internal(String),
}

// == Result Type Alias ==
/// Convenience Result type for the object cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let cases = vec![
            (CacheError::InvalidArgument("key".into()), "Invalid argument: key"),
            (CacheError::OutOfRange("ttl_seconds".into()), "Argument out of range: ttl_seconds"),
            (CacheError::AlreadyExists("k".into()), "Key already exists: k"),
            (CacheError::NotFound("k".into()), "Key not found: k"),
            (CacheError::Internal("poisoned".into()), "Internal error: poisoned"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_not_found_and_type_mismatch_are_distinct() {
        let missing = CacheError::NotFound("k".into());
        let mismatch = CacheError::TypeMismatch("k".into());
        assert_ne!(missing, mismatch);
    }
}
