//! FIFO queue over a singly-linked chain.
//!
//! This module provides [`LinkedQueue`], a first-in first-out container whose
//! nodes form a singly-linked chain from `head` (dequeue side) to `tail`
//! (enqueue side).
//!
//! # Overview
//!
//! - O(1) `enqueue` at the tail
//! - O(1) `dequeue` from the head
//! - O(1) `len`, `is_empty` and `peek`
//! - O(n) `elements` and iteration, front to rear, without draining
//!
//! Dequeuing from an empty queue returns `None`; no operation fails.
//!
//! # Examples
//!
//! ```rust
//! use linkline::linked::LinkedQueue;
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.elements(), vec![2, 3]);
//!
//! // Iteration does not consume the queue
//! assert_eq!(queue.iter().sum::<i32>(), 5);
//! assert_eq!(queue.len(), 2);
//! ```
//!
//! # Structure
//!
//! ```text
//! head -> [2] -> [3] <- tail
//!                 |
//!                 next = None
//! ```

use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use super::arena::{NodeArena, NodeIndex};

/// Node of the singly-linked chain.
#[derive(Clone)]
struct QueueNode<T> {
    /// The stored item.
    element: T,
    /// Forward link towards the tail.
    next: Option<NodeIndex>,
}

/// A FIFO queue backed by a singly-linked chain.
///
/// The queue is empty exactly when both `head` and `tail` are absent.
/// Following `next` from `head` reaches `tail` in `len - 1` steps, and the
/// tail node never has a successor.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `enqueue`  | O(1)       |
/// | `dequeue`  | O(1)       |
/// | `peek`     | O(1)       |
/// | `len`      | O(1)       |
/// | `elements` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use linkline::linked::LinkedQueue;
///
/// let mut queue: LinkedQueue<&str> = LinkedQueue::new();
/// assert_eq!(queue.dequeue(), None);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone)]
pub struct LinkedQueue<T> {
    nodes: NodeArena<QueueNode<T>>,
    /// Front of the queue (dequeue side).
    head: Option<NodeIndex>,
    /// Rear of the queue (enqueue side).
    tail: Option<NodeIndex>,
}

impl<T> LinkedQueue<T> {
    /// Creates a new empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkline::linked::LinkedQueue;
    ///
    /// let queue: LinkedQueue<i32> = LinkedQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty queue with room for `capacity` nodes before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns `true` if the queue holds no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of items in the queue.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Appends an item at the rear of the queue.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkline::linked::LinkedQueue;
    ///
    /// let mut queue = LinkedQueue::new();
    /// queue.enqueue("a");
    /// queue.enqueue("b");
    /// assert_eq!(queue.elements(), vec!["a", "b"]);
    /// ```
    pub fn enqueue(&mut self, item: T) {
        let index = self.nodes.insert(QueueNode {
            element: item,
            next: None,
        });
        match self.tail {
            None => self.head = Some(index),
            Some(tail) => self.nodes[tail].next = Some(index),
        }
        self.tail = Some(index);
    }

    /// Removes and returns the item at the front of the queue.
    ///
    /// Returns `None` when the queue is empty, leaving it empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkline::linked::LinkedQueue;
    ///
    /// let mut queue = LinkedQueue::new();
    /// queue.enqueue("a");
    /// queue.enqueue("b");
    /// assert_eq!(queue.dequeue(), Some("a"));
    /// assert_eq!(queue.dequeue(), Some("b"));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.remove(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.element)
    }

    /// Returns a reference to the item at the front, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.head
            .and_then(|index| self.nodes.get(index))
            .map(|node| &node.element)
    }

    /// Returns an iterator over the items, front to rear.
    ///
    /// The iterator borrows the queue; it can be created any number of times
    /// and never removes anything.
    pub fn iter(&self) -> LinkedQueueIterator<'_, T> {
        LinkedQueueIterator {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<T: Clone> LinkedQueue<T> {
    /// Returns the items front to rear as a new `Vec`.
    ///
    /// The queue is left untouched, so repeated calls give the same result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkline::linked::LinkedQueue;
    ///
    /// let queue: LinkedQueue<i32> = (1..=3).collect();
    /// assert_eq!(queue.elements(), vec![1, 2, 3]);
    /// assert_eq!(queue.elements(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn elements(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to items of a [`LinkedQueue`].
pub struct LinkedQueueIterator<'a, T> {
    nodes: &'a NodeArena<QueueNode<T>>,
    current: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedQueueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedQueueIterator<'_, T> {}

impl<T> FusedIterator for LinkedQueueIterator<'_, T> {}

/// An owning iterator that dequeues items of a [`LinkedQueue`] front to rear.
pub struct LinkedQueueIntoIterator<T> {
    queue: LinkedQueue<T>,
}

impl<T> Iterator for LinkedQueueIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for LinkedQueueIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = LinkedQueueIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedQueueIntoIterator { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = LinkedQueueIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Equality compares items in queue order; slot layout in the arena is ignored.
impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct LinkedQueueVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LinkedQueueVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = LinkedQueue<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut queue = LinkedQueue::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            queue.enqueue(element);
        }
        Ok(queue)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedQueue<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedQueueVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
