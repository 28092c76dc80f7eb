//! Insertion Order Module
//!
//! Implements insertion-order tracking for FIFO cache eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks the order in which keys were inserted.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest insertion (next eviction candidate)
/// - Back = Most recent insertion
///
/// Unlike an access-order (LRU) tracker, a key's position is fixed at
/// insertion time: overwriting a value or reading it does not move the key.
#[derive(Debug)]
pub struct InsertionOrder<K> {
    /// Keys ordered by insertion time, oldest first
    order: VecDeque<K>,
}

impl<K: Eq> InsertionOrder<K> {
    // == Constructor ==
    /// Creates a new empty insertion-order tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Records a newly inserted key at the back (most recent position).
    ///
    /// Callers must only record keys that are not already tracked; the
    /// store enforces this by recording only on fresh inserts, never on
    /// overwrites.
    pub fn record(&mut self, key: K) {
        self.order.push_back(key);
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }

    // == Iterate ==
    /// Iterates over tracked keys in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Clear ==
    /// Removes all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

impl<K: Eq> Default for InsertionOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order: InsertionOrder<String> = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_order_record_keeps_insertion_sequence() {
        let mut order = InsertionOrder::new();

        order.record("key1");
        order.record("key2");
        order.record("key3");

        assert_eq!(order.len(), 3);
        // key1 is oldest (inserted first)
        assert_eq!(order.peek_oldest(), Some(&"key1"));
    }

    #[test]
    fn test_order_pop_oldest() {
        let mut order = InsertionOrder::new();

        order.record("key1");
        order.record("key2");
        order.record("key3");

        let oldest = order.pop_oldest();
        assert_eq!(oldest, Some("key1"));
        assert_eq!(order.len(), 2);

        let oldest = order.pop_oldest();
        assert_eq!(oldest, Some("key2"));
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_order_pop_empty() {
        let mut order: InsertionOrder<&str> = InsertionOrder::new();
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_order_remove() {
        let mut order = InsertionOrder::new();

        order.record("key1");
        order.record("key2");
        order.record("key3");

        order.remove(&"key2");

        assert_eq!(order.len(), 2);
        assert!(!order.contains(&"key2"));
        assert!(order.contains(&"key1"));
        assert!(order.contains(&"key3"));
    }

    #[test]
    fn test_order_remove_nonexistent_key() {
        let mut order = InsertionOrder::new();

        order.record("key1");
        order.record("key2");

        // Remove a key that doesn't exist - should not affect existing keys
        order.remove(&"nonexistent");

        assert_eq!(order.len(), 2);
        assert!(order.contains(&"key1"));
        assert!(order.contains(&"key2"));
    }

    #[test]
    fn test_order_remove_middle_preserves_sequence() {
        let mut order = InsertionOrder::new();

        order.record("a");
        order.record("b");
        order.record("c");
        order.record("d");

        order.remove(&"b");

        // Remaining keys keep their relative order: a, c, d
        assert_eq!(order.pop_oldest(), Some("a"));
        assert_eq!(order.pop_oldest(), Some("c"));
        assert_eq!(order.pop_oldest(), Some("d"));
        assert!(order.is_empty());
    }

    #[test]
    fn test_order_iter_oldest_first() {
        let mut order = InsertionOrder::new();

        order.record("a");
        order.record("b");
        order.record("c");

        let keys: Vec<&&str> = order.iter().collect();
        assert_eq!(keys, vec![&"a", &"b", &"c"]);

        // The iterator is restartable
        let again: Vec<&&str> = order.iter().collect();
        assert_eq!(again, vec![&"a", &"b", &"c"]);
    }

    #[test]
    fn test_order_clear() {
        let mut order = InsertionOrder::new();

        order.record("a");
        order.record("b");
        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.peek_oldest(), None);
    }

    #[test]
    fn test_order_peek_does_not_remove() {
        let mut order = InsertionOrder::new();

        order.record("a");
        order.record("b");

        assert_eq!(order.peek_oldest(), Some(&"a"));
        assert_eq!(order.len(), 2);
        assert_eq!(order.pop_oldest(), Some("a"));
        assert_eq!(order.peek_oldest(), Some(&"b"));
    }
}
