//! Configuration Module
//!
//! Settings for the default in-memory store and its cleanup task.

use std::env;

/// Cache configuration parameters.
///
/// Nothing in the library reads the environment on its own; call
/// [`Config::from_env`] explicitly to opt in.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the in-memory store, used in log output
    pub name: String,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_NAME` - Store name (default: "default")
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: env::var("CACHE_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.name),
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            cleanup_interval: 1,
        }
    }
}
