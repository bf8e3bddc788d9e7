//! Cache Module
//!
//! Provides the bounded, thread-safe LRU store and its supporting pieces.

mod recency;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use stats::CacheStats;
pub use store::LruCache;
