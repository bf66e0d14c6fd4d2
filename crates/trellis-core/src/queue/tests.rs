use crate::error::GraphError;
use crate::queue::PriorityQueue;

#[test]
fn test_len_starts_at_zero() {
    let pq = PriorityQueue::new();
    assert_eq!(pq.len(), 0);
    assert!(pq.is_empty());
}

#[test]
fn test_len_counts_elements() {
    let mut pq = PriorityQueue::new();
    pq.add("a", 1.0);
    assert_eq!(pq.len(), 1);
    pq.add("b", 2.0);
    assert_eq!(pq.len(), 2);
}

#[test]
fn test_keys_returns_all_keys() {
    let mut pq = PriorityQueue::new();
    pq.add("a", 1.0);
    pq.add("1", 2.0);
    pq.add("false", 3.0);
    let mut keys = pq.keys();
    keys.sort_unstable();
    assert_eq!(keys, vec!["1", "a", "false"]);
}

#[test]
fn test_has() {
    let mut pq = PriorityQueue::new();
    assert!(!pq.has("a"));
    pq.add("a", 1.0);
    assert!(pq.has("a"));
}

#[test]
fn test_priority_lookup() {
    let mut pq = PriorityQueue::new();
    pq.add("a", 1.0);
    pq.add("b", 2.0);
    assert_eq!(pq.priority("a"), Some(1.0));
    assert_eq!(pq.priority("b"), Some(2.0));
    assert_eq!(pq.priority("foo"), None);
}

#[test]
fn test_min_on_empty_queue_fails() {
    let pq = PriorityQueue::new();
    assert!(matches!(pq.min(), Err(GraphError::QueueUnderflow)));
}

#[test]
fn test_min_returns_smallest_without_removing() {
    let mut pq = PriorityQueue::new();
    pq.add("b", 2.0);
    pq.add("a", 1.0);
    assert_eq!(pq.min().unwrap(), "a");
    assert_eq!(pq.len(), 2);
}

#[test]
fn test_add_returns_true_for_new_key() {
    let mut pq = PriorityQueue::new();
    assert!(pq.add("a", 1.0));
    assert_eq!(pq.keys(), vec!["a"]);
}

#[test]
fn test_add_returns_false_for_existing_key() {
    let mut pq = PriorityQueue::new();
    pq.add("a", 1.0);
    assert!(!pq.add("a", 1.0));
    assert_eq!(pq.len(), 1);
}

#[test]
fn test_remove_min_yields_ascending_priorities() {
    let mut pq = PriorityQueue::new();
    pq.add("b", 2.0);
    pq.add("a", 1.0);
    pq.add("c", 3.0);
    pq.add("e", 5.0);
    pq.add("d", 4.0);
    assert_eq!(pq.remove_min().unwrap(), "a");
    assert_eq!(pq.remove_min().unwrap(), "b");
    assert_eq!(pq.remove_min().unwrap(), "c");
    assert_eq!(pq.remove_min().unwrap(), "d");
    assert_eq!(pq.remove_min().unwrap(), "e");
    assert!(pq.is_empty());
}

#[test]
fn test_remove_min_on_empty_queue_fails() {
    let mut pq = PriorityQueue::new();
    assert!(matches!(pq.remove_min(), Err(GraphError::QueueUnderflow)));
}

#[test]
fn test_decrease_lowers_priority() {
    let mut pq = PriorityQueue::new();
    pq.add("a", 1.0);
    pq.decrease("a", -1.0).unwrap();
    assert_eq!(pq.priority("a"), Some(-1.0));
}

#[test]
fn test_decrease_restores_heap_order() {
    let mut pq = PriorityQueue::new();
    pq.add("a", 4.0);
    pq.add("b", 3.0);
    pq.add("c", 2.0);
    pq.decrease("a", 1.0).unwrap();
    assert_eq!(pq.remove_min().unwrap(), "a");
    assert_eq!(pq.remove_min().unwrap(), "c");
    assert_eq!(pq.remove_min().unwrap(), "b");
}

#[test]
fn test_decrease_fails_for_missing_key() {
    let mut pq = PriorityQueue::new();
    assert!(matches!(
        pq.decrease("a", -1.0),
        Err(GraphError::QueueKeyNotFound { .. })
    ));
}

#[test]
fn test_decrease_fails_when_priority_raised() {
    let mut pq = PriorityQueue::new();
    pq.add("a", 1.0);
    assert!(matches!(
        pq.decrease("a", 2.0),
        Err(GraphError::PriorityNotDecreased { .. })
    ));
    assert_eq!(pq.priority("a"), Some(1.0));
}
