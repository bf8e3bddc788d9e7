//! Recency List Module
//!
//! Arena-backed doubly-linked list tracking access order for LRU eviction.
//!
//! Entries live in a `Vec` arena with index-based prev/next links, so moving
//! a key to the most-recently-used end is an O(1) unlink/relink instead of a
//! linear scan. Removed slots are recycled through a free list. No unsafe
//! pointer plumbing is involved.

/// Sentinel for absent links in the arena list.
const NIL: usize = usize::MAX;

// == Arena Node ==
/// One slot of the arena. Occupied slots hold the entry; free slots hold
/// `None` and chain to the next free slot via `next`.
#[derive(Debug)]
struct Node<K, V> {
    entry: Option<(K, V)>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Access-order list: head = oldest access, tail = most recent access.
///
/// The list is the sole owner of entry storage. Callers refer to entries by
/// their arena slot, which stays stable until the entry is unlinked.
#[derive(Debug)]
pub(crate) struct RecencyList<K, V> {
    nodes: Vec<Node<K, V>>,
    /// Oldest entry, next eviction candidate.
    head: usize,
    /// Most recently accessed entry.
    tail: usize,
    /// Head of the free-slot chain.
    free: usize,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    #[allow(dead_code)]
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    /// Pre-sizes the arena for a known capacity.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    // == Length ==
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Push Back ==
    /// Appends an entry at the most-recently-used end and returns its slot.
    pub(crate) fn push_back(&mut self, key: K, value: V) -> usize {
        let slot = self.alloc(key, value);
        self.link_at_tail(slot);
        self.len += 1;
        slot
    }

    // == Move To Back ==
    /// Marks the slot as most recently used. O(1) unlink/relink.
    pub(crate) fn move_to_back(&mut self, slot: usize) {
        if self.tail == slot {
            return;
        }
        self.detach(slot);
        self.link_at_tail(slot);
    }

    // == Unlink ==
    /// Detaches a slot from the list, frees it, and returns its entry.
    pub(crate) fn unlink(&mut self, slot: usize) -> (K, V) {
        self.detach(slot);
        self.len -= 1;
        let node = &mut self.nodes[slot];
        let entry = node.entry.take().expect("unlink of a free slot");
        node.next = self.free;
        self.free = slot;
        entry
    }

    // == Pop Front ==
    /// Removes and returns the oldest entry, if any.
    pub(crate) fn pop_front(&mut self) -> Option<(K, V)> {
        if self.head == NIL {
            return None;
        }
        Some(self.unlink(self.head))
    }

    // == Value Access ==
    /// Borrows the value stored at an occupied slot.
    pub(crate) fn value(&self, slot: usize) -> &V {
        match self.nodes[slot].entry {
            Some((_, ref value)) => value,
            None => unreachable!("value read from a free slot"),
        }
    }

    /// Overwrites the value at an occupied slot.
    pub(crate) fn set_value(&mut self, slot: usize, value: V) {
        match self.nodes[slot].entry {
            Some((_, ref mut stored)) => *stored = value,
            None => unreachable!("value write to a free slot"),
        }
    }

    // == Clear ==
    /// Drops every entry and resets the arena.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    // == Iteration ==
    /// Walks entries oldest access first.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Internal Link Surgery ==
    /// Takes a slot from the free chain, or grows the arena.
    fn alloc(&mut self, key: K, value: V) -> usize {
        if self.free != NIL {
            let slot = self.free;
            self.free = self.nodes[slot].next;
            self.nodes[slot].entry = Some((key, value));
            slot
        } else {
            self.nodes.push(Node {
                entry: Some((key, value)),
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        }
    }

    /// Splices a slot out of the list without freeing it.
    fn detach(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = NIL;
    }

    /// Appends a detached slot at the most-recently-used end.
    fn link_at_tail(&mut self, slot: usize) {
        self.nodes[slot].prev = self.tail;
        self.nodes[slot].next = NIL;
        if self.tail == NIL {
            self.head = slot;
        } else {
            self.nodes[self.tail].next = slot;
        }
        self.tail = slot;
    }
}

// == Iterator ==
/// Oldest-to-newest iterator over `(key, value)` pairs.
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;
        node.entry.as_ref().map(|(k, v)| (k, v))
    }
}
