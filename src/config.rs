//! Configuration Module
//!
//! Handles loading the demo harness configuration from environment variables.

use std::env;

/// Workload parameters for the demo/benchmark harness.
///
/// All values can be configured via environment variables with sensible
/// defaults. The library itself takes its capacity as a constructor
/// argument; this struct only drives the harness binary.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Capacity of the cache under test
    pub capacity: usize,
    /// Number of concurrent worker threads per phase
    pub worker_threads: usize,
    /// Operations each worker performs in a phase
    pub ops_per_thread: usize,
    /// Key range random lookups and removals draw from
    pub key_range: usize,
}

impl HarnessConfig {
    /// Creates a HarnessConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Cache capacity (default: 1000)
    /// - `WORKER_THREADS` - Concurrent workers per phase (default: 10)
    /// - `OPS_PER_THREAD` - Operations per worker (default: 1000)
    /// - `KEY_RANGE` - Random key range (default: 10000)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            worker_threads: env::var("WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            ops_per_thread: env::var("OPS_PER_THREAD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            key_range: env::var("KEY_RANGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            worker_threads: 10,
            ops_per_thread: 1000,
            key_range: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HarnessConfig::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.worker_threads, 10);
        assert_eq!(config.ops_per_thread, 1000);
        assert_eq!(config.key_range, 10_000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("WORKER_THREADS");
        env::remove_var("OPS_PER_THREAD");
        env::remove_var("KEY_RANGE");

        let config = HarnessConfig::from_env();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.worker_threads, 10);
        assert_eq!(config.ops_per_thread, 1000);
        assert_eq!(config.key_range, 10_000);
    }
}
