//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a simple reference model: a
//! plain ordered Vec that replays the same operations with the obvious O(n)
//! bookkeeping. Whatever the model says, the store must say too.

use proptest::prelude::*;

use crate::cache::LruCache;

// == Test Configuration ==
// Small key space and capacity so op sequences actually collide and evict.
const MODEL_CAPACITY: usize = 4;

// == Reference Model ==
/// O(n) LRU model: entries ordered oldest access first.
struct ModelLru {
    capacity: usize,
    entries: Vec<(u8, u16)>,
}

impl ModelLru {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    fn put(&mut self, key: u8, value: u16) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
        } else if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push((key, value));
    }

    fn get(&mut self, key: u8) -> Option<u16> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.push(entry);
        Some(entry.1)
    }

    fn remove(&mut self, key: u8) -> bool {
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

// == Operation Strategy ==
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: u16 },
    Get { key: u8 },
    Remove { key: u8 },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (0..12u8, any::<u16>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        3 => (0..12u8).prop_map(|key| CacheOp::Get { key }),
        2 => (0..12u8).prop_map(|key| CacheOp::Remove { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // For any sequence of operations, the store returns exactly what the
    // reference model returns, and ends in the same oldest-to-newest order.
    #[test]
    fn prop_store_matches_reference_model(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let cache = LruCache::new(MODEL_CAPACITY).unwrap();
        let mut model = ModelLru::new(MODEL_CAPACITY);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(key, value);
                    model.put(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model.get(key));
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(cache.remove(&key), model.remove(key));
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(cache.len(), model.entries.len());
        }

        prop_assert_eq!(cache.to_vec(), model.entries);
    }

    // Count never exceeds capacity, after every single operation.
    #[test]
    fn prop_count_bounded_by_capacity(
        capacity in 1..8usize,
        ops in prop::collection::vec(cache_op_strategy(), 1..60),
    ) {
        let cache = LruCache::new(capacity).unwrap();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => cache.put(key, value),
                CacheOp::Get { key } => { cache.get(&key); }
                CacheOp::Remove { key } => { cache.remove(&key); }
                CacheOp::Clear => cache.clear(),
            }
            prop_assert!(cache.len() <= cache.capacity());
        }
    }

    // Inserting distinct keys keeps exactly the newest `capacity` of them,
    // in insertion order.
    #[test]
    fn prop_distinct_puts_keep_newest(capacity in 1..8usize, extra in 0..20usize) {
        let cache = LruCache::new(capacity).unwrap();
        let total = capacity + extra;

        for i in 0..total {
            cache.put(i, i as u64);
        }

        let expected: Vec<(usize, u64)> =
            (total - capacity..total).map(|i| (i, i as u64)).collect();
        prop_assert_eq!(cache.to_vec(), expected);
    }
}
