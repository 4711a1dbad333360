//! Unit tests for LinkedDeque.

use linkline::linked::{LinkedDeque, Rehydrate};
use rstest::rstest;

// =============================================================================
// Empty deque
// =============================================================================

#[rstest]
fn test_new_deque_is_empty() {
    let deque: LinkedDeque<String> = LinkedDeque::new();
    assert!(deque.is_empty());
    assert!(deque.elements().is_empty());
}

#[rstest]
fn test_deletes_on_empty_are_no_ops() {
    let mut deque: LinkedDeque<String> = LinkedDeque::new();
    assert_eq!(deque.delete_front(), None);
    assert_eq!(deque.delete_rear(), None);
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
}

// =============================================================================
// Insertion order
// =============================================================================

#[rstest]
fn test_rear_inserts_keep_order() {
    let mut deque = LinkedDeque::new();
    for value in 1..=4 {
        deque.insert_rear(value);
    }
    assert_eq!(deque.elements(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_front_inserts_reverse_order() {
    let mut deque = LinkedDeque::new();
    for value in 1..=4 {
        deque.insert_front(value);
    }
    assert_eq!(deque.elements(), vec![4, 3, 2, 1]);
}

#[rstest]
fn test_mixed_operations_example() {
    let mut deque = LinkedDeque::new();
    deque.insert_rear("a".to_string());
    deque.insert_front("b".to_string());
    deque.insert_rear("c".to_string());
    assert_eq!(deque.elements(), vec!["b", "a", "c"]);

    assert_eq!(deque.delete_front().as_deref(), Some("b"));
    assert_eq!(deque.delete_rear().as_deref(), Some("c"));
    assert_eq!(deque.elements(), vec!["a"]);
}

// =============================================================================
// Symmetry
// =============================================================================

#[rstest]
fn test_insert_front_then_delete_front_restores_state() {
    let mut deque: LinkedDeque<i32> = (1..=3).collect();
    let before = deque.clone();
    deque.insert_front(0);
    assert_eq!(deque.delete_front(), Some(0));
    assert_eq!(deque, before);
}

#[rstest]
fn test_insert_rear_then_delete_rear_restores_state() {
    let mut deque: LinkedDeque<i32> = (1..=3).collect();
    let before = deque.clone();
    deque.insert_rear(4);
    assert_eq!(deque.delete_rear(), Some(4));
    assert_eq!(deque, before);
}

#[rstest]
fn test_front_deletes_then_rear_deletes_cross_over() {
    let mut deque: LinkedDeque<i32> = (1..=2).collect();
    assert_eq!(deque.delete_rear(), Some(2));
    assert_eq!(deque.delete_front(), Some(1));
    assert_eq!(deque.delete_rear(), None);
    assert!(deque.is_empty());
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn test_reverse_iteration() {
    let deque: LinkedDeque<char> = "abc".chars().collect();
    let reversed: String = deque.iter().rev().collect();
    assert_eq!(reversed, "cba");
}

#[rstest]
fn test_hydrate_uses_rear_insertion() {
    let deque = LinkedDeque::hydrate(vec!["first", "second", "third"]);
    assert_eq!(deque.front(), Some(&"first"));
    assert_eq!(deque.snapshot(), vec!["first", "second", "third"]);
}
