//! Error types for the LRU store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors the store can report.
///
/// The taxonomy is deliberately small: a missing key on `get`/`remove` is a
/// normal outcome (`None`/`false`), not an error. The only failure the store
/// itself produces is an invalid configuration at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity cannot hold any entry
    #[error("invalid capacity {0}: capacity must be at least 1")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the LRU store.
pub type Result<T> = std::result::Result<T, CacheError>;
