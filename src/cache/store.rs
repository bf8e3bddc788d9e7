//! Cache Store Module
//!
//! Thread-safe, fixed-capacity LRU store combining a key→slot index with the
//! recency list, both guarded by a single mutex.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;
use tracing::trace;

use crate::cache::recency::RecencyList;
use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

// == Core State ==
/// Index and recency list, updated together as one atomic unit. Only ever
/// touched with the store mutex held.
#[derive(Debug)]
struct CacheCore<K, V> {
    /// Key → arena slot in the recency list
    index: HashMap<K, usize>,
    /// Entry storage, ordered oldest access to most recent
    recency: RecencyList<K, V>,
    /// Activity counters
    stats: CacheStats,
}

// == LRU Cache ==
/// Bounded key/value store evicting the least-recently-used entry on
/// overflow.
///
/// Every operation serializes through one internal lock, so a single
/// instance can be shared across threads (behind an `Arc` or a scoped
/// borrow) without external synchronization. Lookups and recency updates
/// are O(1).
///
/// # Example
/// ```
/// use lru_store::LruCache;
///
/// let cache = LruCache::new(2).unwrap();
/// cache.put(1, "red");
/// cache.put(2, "blue");
/// cache.get(&1); // 1 is now most recently used
/// cache.put(3, "green"); // evicts 2
///
/// assert_eq!(cache.get(&2), None);
/// assert_eq!(cache.to_vec(), vec![(1, "red"), (3, "green")]);
/// ```
#[derive(Debug)]
pub struct LruCache<K, V> {
    inner: Mutex<CacheCore<K, V>>,
    /// Fixed at construction, read without the lock.
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is 0; a store
    /// that can hold nothing would have to evict every entry as it arrives.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self {
            inner: Mutex::new(CacheCore {
                index: HashMap::with_capacity(capacity),
                recency: RecencyList::with_capacity(capacity),
                stats: CacheStats::new(),
            }),
            capacity,
        })
    }

    // == Capacity ==
    /// Maximum number of entries, fixed for the lifetime of the store.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().index.len()
    }

    /// Returns true when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Clear ==
    /// Removes every entry. Idempotent; activity counters are kept.
    pub fn clear(&self) {
        let mut core = self.inner.lock();
        core.index.clear();
        core.recency.clear();
    }

    // == Get ==
    /// Looks up `key`, returning a copy of its value on a hit.
    ///
    /// A hit also marks the key as most recently used; a miss leaves the
    /// store untouched.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut core = self.inner.lock();
        match core.index.get(key).copied() {
            Some(slot) => {
                core.recency.move_to_back(slot);
                core.stats.record_hit();
                Some(core.recency.value(slot).clone())
            }
            None => {
                core.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Looks up `key` without refreshing its recency or counting the lookup.
    pub fn peek(&self, key: &K) -> Option<V> {
        let core = self.inner.lock();
        core.index
            .get(key)
            .map(|&slot| core.recency.value(slot).clone())
    }

    // == Contains ==
    /// Membership test; does not refresh recency.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.lock().index.contains_key(key)
    }

    // == Put ==
    /// Inserts or overwrites `key`, making it the most recently used entry.
    ///
    /// When the key is new and the store is full, the least-recently-used
    /// entry is evicted first, so the entry count never exceeds capacity.
    /// Eviction and insertion happen under one lock acquisition; no caller
    /// can observe the gap between them.
    pub fn put(&self, key: K, value: V) {
        let mut core = self.inner.lock();

        // Overwrite in place when the key is already present.
        if let Some(slot) = core.index.get(&key).copied() {
            core.recency.set_value(slot, value);
            core.recency.move_to_back(slot);
            return;
        }

        // Make room before inserting a new key at capacity.
        if core.index.len() == self.capacity {
            if let Some((evicted, _)) = core.recency.pop_front() {
                core.index.remove(&evicted);
                core.stats.record_eviction();
                trace!("evicted least-recently-used entry");
            }
        }

        let slot = core.recency.push_back(key.clone(), value);
        core.index.insert(key, slot);
    }

    // == Remove ==
    /// Removes `key` if present, reporting whether an entry was dropped.
    pub fn remove(&self, key: &K) -> bool {
        let mut core = self.inner.lock();
        match core.index.remove(key) {
            Some(slot) => {
                core.recency.unlink(slot);
                true
            }
            None => false,
        }
    }

    // == Snapshot ==
    /// Copies the entries out in access order, oldest first.
    ///
    /// The snapshot is taken atomically under the store lock and is fully
    /// detached: later store operations do not show through, and reading it
    /// does not refresh anyone's recency.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        let core = self.inner.lock();
        core.recency
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    // == Stats ==
    /// Snapshot of the activity counters plus the current entry count.
    pub fn stats(&self) -> CacheStats {
        let core = self.inner.lock();
        let mut stats = core.stats.clone();
        stats.entries = core.index.len();
        stats
    }
}
