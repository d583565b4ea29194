//! Integration Tests for the Response Cache
//!
//! Exercises the cache's public contract under real task concurrency:
//! isolation between keys, visibility across tasks, and the reaper
//! running alongside foreground writers.

use std::sync::Arc;
use std::time::Duration;

use pokedex::Cache;

const TASKS: usize = 32;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_and_readers_stay_isolated() {
    let cache = Arc::new(Cache::new(Duration::from_secs(60)));

    // N tasks each add their own key.
    let mut writers = Vec::new();
    for i in 0..TASKS {
        let cache = Arc::clone(&cache);
        writers.push(tokio::spawn(async move {
            cache.add(
                format!("https://example.com/item/{}", i),
                format!("payload-{}", i).into_bytes(),
            );
        }));
    }
    for writer in writers {
        writer.await.unwrap();
    }
    assert_eq!(cache.len(), TASKS);

    // N tasks each read back their own key and must see exactly their
    // own payload.
    let mut readers = Vec::new();
    for i in 0..TASKS {
        let cache = Arc::clone(&cache);
        readers.push(tokio::spawn(async move {
            let value = cache.get(&format!("https://example.com/item/{}", i));
            assert_eq!(value, Some(format!("payload-{}", i).into_bytes()));
        }));
    }
    for reader in readers {
        reader.await.unwrap();
    }

    cache.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn add_in_one_task_is_visible_from_another() {
    let cache = Arc::new(Cache::new(Duration::from_secs(60)));

    let writer = {
        let cache = Arc::clone(&cache);
        tokio::spawn(async move {
            cache.add("shared", b"hello".to_vec());
        })
    };
    writer.await.unwrap();

    let reader = {
        let cache = Arc::clone(&cache);
        tokio::spawn(async move { cache.get("shared") })
    };
    assert_eq!(reader.await.unwrap(), Some(b"hello".to_vec()));

    cache.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn reaper_runs_alongside_foreground_traffic() {
    let cache = Arc::new(Cache::new(Duration::from_millis(50)));

    // Keep writing fresh keys while several sweep intervals elapse; the
    // reaper must evict old generations without disturbing current ones.
    for generation in 0..6u32 {
        for i in 0..20u32 {
            cache.add(
                format!("gen-{}/item-{}", generation, i),
                vec![generation as u8; 8],
            );
        }
        tokio::time::sleep(Duration::from_millis(60)).await;
    }

    // Everything written is at least two TTLs old by now except the
    // last generation; after one more full interval only swept state
    // remains and the cache is far below the total written count.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(cache.len() < 6 * 20);
    assert_eq!(cache.get("gen-0/item-0"), None);

    cache.shutdown().await;
}

#[tokio::test]
async fn entries_added_after_shutdown_are_never_reaped() {
    let cache = Cache::new(Duration::from_millis(40));
    cache.shutdown().await;

    cache.add("kept", b"forever".to_vec());
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(cache.get("kept"), Some(b"forever".to_vec()));
}
