//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored response body stamped with its insertion time.
///
/// The payload is opaque to the cache; it is stored and returned
/// byte-for-byte. Ages are measured against a monotonic clock so they
/// are immune to wall-clock adjustments within a process run.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Creation timestamp, monotonic
    pub created_at: Instant,
    /// The stored response bytes
    pub value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Age ==
    /// Returns how long ago this entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry's age has exceeded the given TTL.
    ///
    /// Strictly greater-than: an entry whose age equals the TTL exactly
    /// is still live, matching the reaper's eviction rule.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(Instant::now(), ttl)
    }

    /// Expiry check against an externally supplied clock snapshot, so a
    /// whole sweep judges every entry at the same point in time. An
    /// entry created after `now` (a concurrent replacement) reads as
    /// age zero and is kept.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.created_at) > ttl
    }
}
