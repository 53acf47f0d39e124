//! Recency Tracking Module
//!
//! Maintains the access order that drives LRU eviction.

use std::collections::VecDeque;

// == Recency List ==
/// Tracks keys by recency of use.
///
/// Orientation matches iteration order of the store:
/// - Front = least recently used (next eviction candidate)
/// - Back = most recently used
#[derive(Debug, Default)]
pub struct RecencyList {
    order: VecDeque<String>,
}

impl RecencyList {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// An existing key is moved to the back; a new key is appended.
    pub fn touch(&mut self, key: &str) {
        self.forget(key);
        self.order.push_back(key.to_string());
    }

    // == Forget ==
    /// Drops a key from the list. No-op if the key is not tracked.
    pub fn forget(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used key, if any.
    pub fn pop_lru(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek LRU ==
    /// Returns the least recently used key without removing it.
    pub fn peek_lru(&self) -> Option<&String> {
        self.order.front()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Contains ==
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let mut list = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.pop_lru(), None);
    }

    #[test]
    fn test_insertion_order_is_recency_order() {
        let mut list = RecencyList::new();
        list.touch("a");
        list.touch("b");
        list.touch("c");

        assert_eq!(list.len(), 3);
        assert_eq!(list.peek_lru(), Some(&"a".to_string()));
    }

    #[test]
    fn test_touch_moves_to_back() {
        let mut list = RecencyList::new();
        list.touch("a");
        list.touch("b");
        list.touch("c");

        list.touch("a");

        // a was refreshed, so b is now the eviction candidate.
        assert_eq!(list.pop_lru(), Some("b".to_string()));
        assert_eq!(list.pop_lru(), Some("c".to_string()));
        assert_eq!(list.pop_lru(), Some("a".to_string()));
    }

    #[test]
    fn test_touch_same_key_no_duplicates() {
        let mut list = RecencyList::new();
        list.touch("a");
        list.touch("a");
        list.touch("a");

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_forget() {
        let mut list = RecencyList::new();
        list.touch("a");
        list.touch("b");
        list.touch("c");

        list.forget("b");

        assert_eq!(list.len(), 2);
        assert!(!list.contains("b"));
        assert!(list.contains("a"));
        assert!(list.contains("c"));
    }

    #[test]
    fn test_forget_unknown_key_is_noop() {
        let mut list = RecencyList::new();
        list.touch("a");

        list.forget("missing");

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::new();
        list.touch("a");
        list.touch("b");

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.peek_lru(), None);
    }
}
