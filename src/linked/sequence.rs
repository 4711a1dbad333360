//! Load/persist contract for rebuilding a container from a stored sequence.
//!
//! A container that lives only for one unit of work is rebuilt from its
//! stored contents, mutated, and written back. [`Rehydrate`] names both halves
//! of that cycle without tying them to any particular storage.

use super::{LinkedDeque, LinkedQueue};

/// Rebuilds a container from an ordered sequence and reads it back out.
///
/// `hydrate` always inserts at the rear, in sequence order, so that
/// `snapshot(hydrate(items)) == items` for every sequence. Replaying with
/// front insertion would silently reverse the stored history.
///
/// # Examples
///
/// ```rust
/// use linkline::linked::{LinkedQueue, Rehydrate};
///
/// let stored = vec![1, 2, 3];
/// let mut queue = LinkedQueue::hydrate(stored.clone());
/// assert_eq!(queue.snapshot(), stored);
///
/// queue.dequeue();
/// assert_eq!(queue.snapshot(), vec![2, 3]);
/// ```
pub trait Rehydrate: Sized {
    /// The stored item type.
    type Item;

    /// Builds a container by inserting each item at the rear, in order.
    fn hydrate<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>;

    /// Returns the contents front to rear, ready to be stored.
    fn snapshot(&self) -> Vec<Self::Item>;
}

impl<T: Clone> Rehydrate for LinkedQueue<T> {
    type Item = T;

    fn hydrate<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new();
        for item in items {
            queue.enqueue(item);
        }
        queue
    }

    fn snapshot(&self) -> Vec<T> {
        self.elements()
    }
}

impl<T: Clone> Rehydrate for LinkedDeque<T> {
    type Item = T;

    fn hydrate<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut deque = Self::new();
        for item in items {
            deque.insert_rear(item);
        }
        deque
    }

    fn snapshot(&self) -> Vec<T> {
        self.elements()
    }
}
