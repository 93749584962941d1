//! Background Tasks Module
//!
//! # Tasks
//! - TTL Cleanup: periodically purges expired entries from a `MemoryStore`

mod cleanup;

pub use cleanup::spawn_cleanup_task;
