//! LRU Store demo harness
//!
//! Drives a shared cache from multiple threads and reports counts and
//! timings. Everything here lives outside the store's contract; it exists to
//! exercise the library under real contention.

use std::thread;
use std::time::Instant;

use anyhow::Result;
use rand::Rng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_store::{HarnessConfig, LruCache};

/// Entry point for the demo harness.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load workload parameters from environment variables
/// 3. Run a small single-threaded walkthrough of the API
/// 4. Run timed multithreaded put, get, and remove phases
fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HarnessConfig::from_env();
    info!(
        "workload: capacity={}, threads={}, ops_per_thread={}, key_range={}",
        config.capacity, config.worker_threads, config.ops_per_thread, config.key_range
    );

    let cache: LruCache<u64, String> = LruCache::new(config.capacity)?;

    walkthrough(&cache);
    cache.clear();

    put_phase(&cache, &config);
    get_phase(&cache, &config);
    remove_phase(&cache, &config);

    let stats = cache.stats();
    info!(
        "final stats: entries={}, hits={}, misses={}, evictions={}, hit_rate={:.3}",
        stats.entries,
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.hit_rate()
    );

    Ok(())
}

/// Single-threaded tour of the public API.
fn walkthrough(cache: &LruCache<u64, String>) {
    cache.put(1, "red".to_string());
    cache.put(2, "blue".to_string());
    info!("cache has {} entries after two puts", cache.len());
    dump_snapshot(cache, "after creation");

    let value = cache.get(&1);
    info!("got key 1, value={:?}", value);

    cache.remove(&1);
    info!("removed key 1, {} entries left", cache.len());
    dump_snapshot(cache, "after removal");
}

/// Logs a snapshot oldest-to-newest.
fn dump_snapshot(cache: &LruCache<u64, String>, title: &str) {
    let entries = cache.to_vec();
    info!("{}: {} entries, oldest to newest", title, entries.len());
    for (key, value) in entries {
        info!("  key={} value={}", key, value);
    }
}

/// Each worker inserts a disjoint range of keys concurrently.
fn put_phase(cache: &LruCache<u64, String>, config: &HarnessConfig) {
    let started = Instant::now();
    thread::scope(|scope| {
        for worker in 0..config.worker_threads {
            let start = (worker * config.ops_per_thread + 1) as u64;
            scope.spawn(move || {
                for key in start..start + config.ops_per_thread as u64 {
                    cache.put(key, key.to_string());
                }
            });
        }
    });
    info!(
        "put phase: {} threads x {} puts in {:?}, {} entries",
        config.worker_threads,
        config.ops_per_thread,
        started.elapsed(),
        cache.len()
    );
}

/// Workers issue random lookups over the key range and count their hits.
fn get_phase(cache: &LruCache<u64, String>, config: &HarnessConfig) {
    info!("starting get phase with {} entries", cache.len());
    let started = Instant::now();
    thread::scope(|scope| {
        for _ in 0..config.worker_threads {
            scope.spawn(|| {
                let mut rng = rand::thread_rng();
                let mut found = 0usize;
                for _ in 0..config.ops_per_thread {
                    let key = rng.gen_range(0..config.key_range) as u64;
                    if cache.get(&key).is_some() {
                        found += 1;
                    }
                }
                info!("get worker located {} matches", found);
            });
        }
    });
    info!("get phase finished in {:?}", started.elapsed());
}

/// Random removals over the key range, single-threaded.
fn remove_phase(cache: &LruCache<u64, String>, config: &HarnessConfig) {
    info!("starting remove phase with {} entries", cache.len());
    let mut rng = rand::thread_rng();
    let mut removed = 0usize;
    let started = Instant::now();
    for _ in 0..config.ops_per_thread {
        let key = rng.gen_range(0..config.key_range) as u64;
        if cache.remove(&key) {
            removed += 1;
        }
    }
    info!(
        "remove phase: {} removed in {:?}, {} entries left",
        removed,
        started.elapsed(),
        cache.len()
    );
}
