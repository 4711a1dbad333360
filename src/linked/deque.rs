//! Double-ended queue over a doubly-linked chain.
//!
//! This module provides [`LinkedDeque`], a container that accepts insertions
//! and deletions at both its `front` and its `rear`.
//!
//! # Overview
//!
//! - O(1) `insert_front`, `insert_rear`
//! - O(1) `delete_front`, `delete_rear`
//! - O(1) `len`, `is_empty`, `front`, `rear`
//! - O(n) `elements` and double-ended iteration
//!
//! Deleting from an empty deque returns `None`; no operation fails.
//!
//! # Link Invariants
//!
//! - the front node has no `prev`, the rear node has no `next`
//! - for every linked pair, `node.next.prev == node` and `node.prev.next == node`
//! - the deque is empty exactly when both `front` and `rear` are absent
//!
//! ```text
//! front -> [b] <-> [a] <-> [c] <- rear
//! ```
//!
//! # Examples
//!
//! ```rust
//! use linkline::linked::LinkedDeque;
//!
//! let mut deque = LinkedDeque::new();
//! deque.insert_rear(1);
//! deque.insert_front(0);
//! deque.insert_rear(2);
//!
//! assert_eq!(deque.elements(), vec![0, 1, 2]);
//! assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), vec![2, 1, 0]);
//! ```

use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use super::arena::{NodeArena, NodeIndex};

#[derive(Clone)]
struct DequeNode<T> {
    element: T,
    /// Towards the rear.
    next: Option<NodeIndex>,
    /// Towards the front. Never owns the node it points at.
    prev: Option<NodeIndex>,
}

/// A double-ended queue backed by a doubly-linked chain.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `insert_front` | O(1)       |
/// | `insert_rear`  | O(1)       |
/// | `delete_front` | O(1)       |
/// | `delete_rear`  | O(1)       |
/// | `len`          | O(1)       |
/// | `elements`     | O(n)       |
///
/// # Examples
///
/// ```rust
/// use linkline::linked::LinkedDeque;
///
/// let mut deque = LinkedDeque::new();
/// deque.insert_front("x");
/// assert_eq!(deque.delete_rear(), Some("x"));
/// assert_eq!(deque.delete_rear(), None);
/// ```
#[derive(Clone)]
pub struct LinkedDeque<T> {
    nodes: NodeArena<DequeNode<T>>,
    front: Option<NodeIndex>,
    rear: Option<NodeIndex>,
}

impl<T> LinkedDeque<T> {
    /// Creates a new empty deque.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            front: None,
            rear: None,
        }
    }

    /// Creates an empty deque with room for `capacity` nodes before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            front: None,
            rear: None,
        }
    }

    /// Returns `true` if the deque holds no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Returns the number of items in the deque.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts an item before the current front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkline::linked::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
    /// deque.insert_front(2);
    /// deque.insert_front(1);
    /// assert_eq!(deque.elements(), vec![1, 2]);
    /// ```
    pub fn insert_front(&mut self, item: T) {
        let index = self.nodes.insert(DequeNode {
            element: item,
            next: self.front,
            prev: None,
        });
        match self.front {
            None => self.rear = Some(index),
            Some(old_front) => self.nodes[old_front].prev = Some(index),
        }
        self.front = Some(index);
    }

    /// Inserts an item after the current rear.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkline::linked::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
    /// deque.insert_rear(1);
    /// deque.insert_rear(2);
    /// assert_eq!(deque.elements(), vec![1, 2]);
    /// ```
    pub fn insert_rear(&mut self, item: T) {
        let index = self.nodes.insert(DequeNode {
            element: item,
            next: None,
            prev: self.rear,
        });
        match self.rear {
            None => self.front = Some(index),
            Some(old_rear) => self.nodes[old_rear].next = Some(index),
        }
        self.rear = Some(index);
    }

    /// Removes and returns the front item, or `None` if the deque is empty.
    ///
    /// The new front's `prev` link is cleared so it never refers to the
    /// removed node.
    pub fn delete_front(&mut self) -> Option<T> {
        let front = self.front?;
        let node = self.nodes.remove(front);
        self.front = node.next;
        match self.front {
            None => self.rear = None,
            Some(new_front) => self.nodes[new_front].prev = None,
        }
        Some(node.element)
    }

    /// Removes and returns the rear item, or `None` if the deque is empty.
    ///
    /// The new rear's `next` link is cleared so it never refers to the
    /// removed node.
    pub fn delete_rear(&mut self) -> Option<T> {
        let rear = self.rear?;
        let node = self.nodes.remove(rear);
        self.rear = node.prev;
        match self.rear {
            None => self.front = None,
            Some(new_rear) => self.nodes[new_rear].next = None,
        }
        Some(node.element)
    }

    /// Returns a reference to the front item, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.front
            .and_then(|index| self.nodes.get(index))
            .map(|node| &node.element)
    }

    /// Returns a reference to the rear item, if any.
    #[must_use]
    pub fn rear(&self) -> Option<&T> {
        self.rear
            .and_then(|index| self.nodes.get(index))
            .map(|node| &node.element)
    }

    /// Returns a double-ended iterator over the items, front to rear.
    pub fn iter(&self) -> LinkedDequeIterator<'_, T> {
        LinkedDequeIterator {
            nodes: &self.nodes,
            front: self.front,
            rear: self.rear,
            remaining: self.len(),
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.rear = None;
    }
}

impl<T: Clone> LinkedDeque<T> {
    /// Returns the items front to rear as a new `Vec`, leaving the deque untouched.
    #[must_use]
    pub fn elements(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A double-ended iterator over references to items of a [`LinkedDeque`].
pub struct LinkedDequeIterator<'a, T> {
    nodes: &'a NodeArena<DequeNode<T>>,
    front: Option<NodeIndex>,
    rear: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedDequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for LinkedDequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.rear?];
        self.rear = node.prev;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for LinkedDequeIterator<'_, T> {}

impl<T> FusedIterator for LinkedDequeIterator<'_, T> {}

/// An owning iterator that drains a [`LinkedDeque`] from either end.
pub struct LinkedDequeIntoIterator<T> {
    deque: LinkedDeque<T>,
}

impl<T> Iterator for LinkedDequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.delete_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for LinkedDequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.delete_rear()
    }
}

impl<T> ExactSizeIterator for LinkedDequeIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedDeque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a deque by inserting every item at the rear, preserving order.
impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_rear(item);
        }
    }
}

impl<T> IntoIterator for LinkedDeque<T> {
    type Item = T;
    type IntoIter = LinkedDequeIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedDequeIntoIterator { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = LinkedDequeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedDeque<T> {
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
impl<T: serde::Serialize> serde::Serialize for LinkedDeque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct LinkedDequeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LinkedDequeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = LinkedDeque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut deque = LinkedDeque::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            deque.insert_rear(element);
        }
        Ok(deque)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedDeque<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedDequeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
