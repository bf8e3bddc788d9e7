//! LRU Store - a thread-safe, fixed-capacity LRU cache
//!
//! Provides a bounded key/value store that evicts the least-recently-used
//! entry when an insert would exceed capacity. All operations go through one
//! internal lock and run in O(1), so a single instance can be shared freely
//! across threads.
//!
//! ```
//! use lru_store::LruCache;
//!
//! let cache: lru_store::Result<LruCache<u32, String>> = LruCache::new(100);
//! let cache = cache.unwrap();
//!
//! cache.put(1, "red".to_string());
//! assert_eq!(cache.get(&1), Some("red".to_string()));
//! assert_eq!(cache.get(&2), None);
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, LruCache};
pub use config::HarnessConfig;
pub use error::{CacheError, Result};
