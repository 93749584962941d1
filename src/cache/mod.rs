//! Cache Module
//!
//! The typed cache façade and its statistics.

mod facade;
mod stats;


// Re-export public types
pub use facade::{Cache, CacheBuilder};
pub use stats::CacheStats;
