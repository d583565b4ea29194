//! Cache Store Module
//!
//! The response cache: a single locked map of URL keys to byte payloads,
//! paired with a background reaper task that evicts entries older than
//! the configured TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheEntry;

/// Shared handle to the guarded entry map.
type Entries = Arc<Mutex<HashMap<String, CacheEntry>>>;

// == Cache ==
/// TTL-bounded response cache.
///
/// Construction spawns the reaper, which sweeps the map once per TTL
/// interval and removes entries whose age exceeds the TTL. Reads do not
/// check staleness: an entry stays visible until the reaper removes it,
/// so a value can be observed up to roughly twice the TTL after
/// insertion. Re-adding a key replaces the entry and resets its age.
///
/// All operations serialize through one exclusive lock held only for a
/// single map operation at a time; nothing holds it across an await.
#[derive(Debug)]
pub struct Cache {
    /// URL -> cached response body
    entries: Entries,
    /// Entry lifetime, fixed at construction
    ttl: Duration,
    /// Raised once to stop the reaper
    shutdown_tx: watch::Sender<bool>,
    /// Reaper task handle, taken by `shutdown`
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper task.
    ///
    /// The reaper uses `ttl` as its sweep interval, which bounds
    /// worst-case staleness to about `2 * ttl` without adding a second
    /// configuration knob. Returns immediately; the reaper does no work
    /// until its first tick.
    ///
    /// # Panics
    /// Panics if `ttl` is zero. A zero TTL is a programming error: it
    /// would make every entry expire on the very next sweep.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        assert!(!ttl.is_zero(), "cache TTL must be positive");

        let entries: Entries = Arc::new(Mutex::new(HashMap::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper(Arc::clone(&entries), ttl, shutdown_rx);

        Self {
            entries,
            ttl,
            shutdown_tx,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamped with the
    /// current time.
    ///
    /// Replacing an existing key resets its age: the retention window
    /// restarts from this call. Always succeeds.
    pub fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.entries.lock().insert(key.into(), CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the stored bytes for `key`, or `None` on miss.
    ///
    /// Present entries are returned regardless of how close they are to
    /// expiry; only the reaper evicts. A read does not refresh the
    /// entry's age.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().get(key).map(|entry| entry.value.clone())
    }

    // == Remove ==
    /// Deletes the entry for `key` if present. No-op on an absent key.
    pub fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Shutdown ==
    /// Signals the reaper to stop and waits for it to exit.
    ///
    /// Idempotent; later calls return immediately. The cache map stays
    /// usable afterwards, it just no longer evicts.
    pub async fn shutdown(&self) {
        let handle = self.reaper.lock().take();
        if let Some(handle) = handle {
            let _ = self.shutdown_tx.send(true);
            let _ = handle.await;
            info!("Cache reaper stopped");
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        // If shutdown() was never awaited, the reaper still observes the
        // raised signal on its next wakeup and exits instead of running
        // for the rest of the process.
        let _ = self.shutdown_tx.send(true);
    }
}

// == Reaper ==
/// Spawns the background task that periodically evicts expired entries.
///
/// The task alternates between idling until the next tick and sweeping
/// the map, until the shutdown signal is raised.
fn spawn_reaper(
    entries: Entries,
    ttl: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache reaper with sweep interval {:?}", ttl);

        let mut ticker = tokio::time::interval(ttl);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick of a tokio interval completes immediately;
        // consume it so the first sweep happens one full TTL from now.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = sweep(&entries, ttl);
                    if removed > 0 {
                        info!("Reaper sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Reaper sweep: no expired entries");
                    }
                }
                _ = shutdown_rx.changed() => {
                    debug!("Cache reaper received shutdown signal");
                    break;
                }
            }
        }
    })
}

/// One scan-and-evict pass. Returns the number of entries removed.
///
/// Ages are computed against a single point-in-time snapshot. The lock
/// is taken once to collect candidates and then reacquired per
/// candidate eviction, so a foreground `get` or `add` never waits
/// behind a full table scan. Each candidate is rechecked under the lock
/// before removal: a concurrent `add` that replaced the entry resets
/// its age and the fresh entry is kept.
fn sweep(entries: &Entries, ttl: Duration) -> usize {
    let now = Instant::now();

    let candidates: Vec<String> = entries
        .lock()
        .iter()
        .filter(|(_, entry)| entry.is_expired_at(now, ttl))
        .map(|(key, _)| key.clone())
        .collect();

    let mut removed = 0;
    for key in candidates {
        let mut guard = entries.lock();
        let still_expired = guard
            .get(&key)
            .is_some_and(|entry| entry.is_expired_at(now, ttl));
        if still_expired {
            guard.remove(&key);
            removed += 1;
        }
    }
    removed
}
