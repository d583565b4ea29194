//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's observable contracts under
//! arbitrary keys, payloads, and operation sequences. TTLs are long
//! enough that the reaper never interferes with these properties.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::Cache;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

/// Runs an async test body on a throwaway single-threaded runtime, since
/// proptest closures are synchronous and `Cache::new` spawns a task.
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
        .block_on(fut)
}

// == Strategies ==
/// Generates URL-ish cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/?=._-]{1,64}".prop_map(|path| format!("https://example.com/{}", path))
}

/// Generates arbitrary byte payloads, empty included
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// One cache operation, for sequence-based properties
#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Remove { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Storing a payload and reading it straight back returns the exact
    // bytes that were stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        block_on(async {
            let cache = Cache::new(TEST_TTL);

            cache.add(key.clone(), value.clone());

            prop_assert_eq!(cache.get(&key), Some(value));
            cache.shutdown().await;
            Ok(())
        })?;
    }

    // A key that was never added is a miss.
    #[test]
    fn prop_miss_on_unknown_key(key in key_strategy()) {
        block_on(async {
            let cache = Cache::new(TEST_TTL);

            prop_assert_eq!(cache.get(&key), None);
            cache.shutdown().await;
            Ok(())
        })?;
    }

    // Writing the same key twice leaves only the second value visible.
    #[test]
    fn prop_overwrite_last_write_wins(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        block_on(async {
            let cache = Cache::new(TEST_TTL);

            cache.add(key.clone(), first);
            cache.add(key.clone(), second.clone());

            prop_assert_eq!(cache.get(&key), Some(second));
            prop_assert_eq!(cache.len(), 1);
            cache.shutdown().await;
            Ok(())
        })?;
    }

    // After a remove, the key misses, and removing again changes nothing.
    #[test]
    fn prop_remove_idempotence(key in key_strategy(), value in value_strategy()) {
        block_on(async {
            let cache = Cache::new(TEST_TTL);

            cache.add(key.clone(), value);
            cache.remove(&key);
            prop_assert_eq!(cache.get(&key), None);

            cache.remove(&key);
            prop_assert_eq!(cache.get(&key), None);
            cache.shutdown().await;
            Ok(())
        })?;
    }

    // Any sequence of adds and removes leaves the cache observably
    // identical to a plain map driven by the same sequence.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..40)) {
        block_on(async {
            let cache = Cache::new(TEST_TTL);
            let mut model: HashMap<String, Vec<u8>> = HashMap::new();

            for op in &ops {
                match op {
                    CacheOp::Add { key, value } => {
                        cache.add(key.clone(), value.clone());
                        model.insert(key.clone(), value.clone());
                    }
                    CacheOp::Remove { key } => {
                        cache.remove(key);
                        model.remove(key);
                    }
                }
            }

            prop_assert_eq!(cache.len(), model.len());
            for (key, value) in &model {
                let got = cache.get(key);
                prop_assert_eq!(got.as_ref(), Some(value));
            }
            cache.shutdown().await;
            Ok(())
        })?;
    }
}
