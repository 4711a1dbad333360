#![cfg(feature = "serde")]

//! Integration tests for serde support in linkline.
//!
//! Containers serialize as plain sequences, front to rear.

use linkline::linked::{LinkedDeque, LinkedQueue};
use rstest::rstest;

#[rstest]
fn test_queue_serializes_front_first() {
    let mut queue = LinkedQueue::new();
    queue.enqueue("a");
    queue.enqueue("b");
    queue.dequeue();
    queue.enqueue("c");
    assert_eq!(serde_json::to_string(&queue).unwrap(), r#"["b","c"]"#);
}

#[rstest]
fn test_queue_json_roundtrip() {
    let queue: LinkedQueue<i32> = (1..=10).collect();
    let json = serde_json::to_string(&queue).unwrap();
    let restored: LinkedQueue<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(queue, restored);
}

#[rstest]
fn test_deque_serializes_front_first() {
    let mut deque = LinkedDeque::new();
    deque.insert_rear(2);
    deque.insert_front(1);
    deque.insert_rear(3);
    assert_eq!(serde_json::to_string(&deque).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_deque_deserializes_with_rear_insertion() {
    let deque: LinkedDeque<String> = serde_json::from_str(r#"["x","y","z"]"#).unwrap();
    assert_eq!(deque.front().map(String::as_str), Some("x"));
    assert_eq!(deque.rear().map(String::as_str), Some("z"));
}

#[rstest]
fn test_empty_containers_serialize_as_empty_arrays() {
    let queue: LinkedQueue<i32> = LinkedQueue::new();
    let deque: LinkedDeque<i32> = LinkedDeque::new();
    assert_eq!(serde_json::to_string(&queue).unwrap(), "[]");
    assert_eq!(serde_json::to_string(&deque).unwrap(), "[]");
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<LinkedQueue<i32>, _> = serde_json::from_str(r#"{"a":1}"#);
    assert!(result.is_err());
}
