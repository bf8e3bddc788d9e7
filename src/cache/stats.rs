//! Cache Statistics Module
//!
//! Tracks hit, miss, and eviction counters for the store.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of store activity counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Entries dropped to make room at capacity
    pub evictions: u64,
    /// Number of entries at snapshot time
    pub entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a stats block with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Fraction of lookups that hit, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 before any lookup has happened.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    // == Recording ==
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
