//! Property-based tests for LinkedQueue.
//!
//! The queue is checked against `std::collections::VecDeque` used as a model.

use std::collections::VecDeque;

use linkline::linked::{LinkedQueue, Rehydrate};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum QueueOperation {
    Enqueue(i32),
    Dequeue,
}

fn queue_operation() -> impl Strategy<Value = QueueOperation> {
    prop_oneof![
        3 => any::<i32>().prop_map(QueueOperation::Enqueue),
        2 => Just(QueueOperation::Dequeue),
    ]
}

proptest! {
    #[test]
    fn prop_elements_match_insertion_order(items in prop::collection::vec(any::<i32>(), 0..50)) {
        let queue: LinkedQueue<i32> = items.iter().copied().collect();
        prop_assert_eq!(queue.elements(), items);
    }

    #[test]
    fn prop_is_empty_iff_elements_empty(items in prop::collection::vec(any::<i32>(), 0..10)) {
        let queue = LinkedQueue::hydrate(items);
        prop_assert_eq!(queue.is_empty(), queue.elements().is_empty());
    }

    #[test]
    fn prop_fifo_law(items in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut queue = LinkedQueue::new();
        for item in &items {
            queue.enqueue(*item);
        }
        let mut dequeued = Vec::new();
        for _ in 0..items.len() {
            if let Some(item) = queue.dequeue() {
                dequeued.push(item);
            }
        }
        prop_assert_eq!(dequeued, items);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn prop_round_trip(items in prop::collection::vec(any::<i32>(), 0..50)) {
        prop_assert_eq!(LinkedQueue::hydrate(items.clone()).snapshot(), items);
    }

    #[test]
    fn prop_matches_model(operations in prop::collection::vec(queue_operation(), 0..100)) {
        let mut queue = LinkedQueue::new();
        let mut model = VecDeque::new();
        for operation in operations {
            match operation {
                QueueOperation::Enqueue(item) => {
                    queue.enqueue(item);
                    model.push_back(item);
                }
                QueueOperation::Dequeue => {
                    prop_assert_eq!(queue.dequeue(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.peek(), model.front());
        }
        prop_assert_eq!(queue.elements(), model.into_iter().collect::<Vec<_>>());
    }
}
