//! Cache Module
//!
//! Provides the in-memory response cache with TTL-based eviction
//! performed by a background reaper task.

mod entry;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use store::Cache;
