//! Store Module
//!
//! The storage seam behind the cache: the `Store` trait and the default
//! in-memory implementation.

mod entry;
mod memory;
mod traits;

use std::any::Any;
use std::sync::Arc;

// Re-export public types
pub(crate) use entry::StoreEntry;
pub use memory::MemoryStore;
pub use traits::Store;

/// Type-erased payload held by a store.
pub type StoredValue = Arc<dyn Any + Send + Sync>;
