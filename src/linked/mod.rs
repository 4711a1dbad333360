//! Pointer-linked containers.
//!
//! This module provides mutable linked containers whose nodes live in an
//! index arena owned by the container:
//!
//! - [`LinkedQueue`]: FIFO queue over a singly-linked chain
//! - [`LinkedDeque`]: Double-ended queue over a doubly-linked chain
//! - [`Rehydrate`]: Load/persist contract used to rebuild a container from a stored sequence
//!
//! # Node Ownership
//!
//! Every node is owned by the arena of its container. Links between nodes are
//! arena indices, so the `prev` links of the deque are non-owning back-references
//! and no reference cycle can form.
//!
//! ```text
//! queue:  head -> [a] -> [b] -> [c] <- tail
//! deque:  front -> [a] <-> [b] <-> [c] <- rear
//! ```
//!
//! # Examples
//!
//! ## `LinkedQueue`
//!
//! ```rust
//! use linkline::linked::LinkedQueue;
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//!
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.elements(), vec!["b"]);
//! ```
//!
//! ## `LinkedDeque`
//!
//! ```rust
//! use linkline::linked::LinkedDeque;
//!
//! let mut deque = LinkedDeque::new();
//! deque.insert_rear("a");
//! deque.insert_front("b");
//! deque.insert_rear("c");
//! assert_eq!(deque.elements(), vec!["b", "a", "c"]);
//!
//! assert_eq!(deque.delete_front(), Some("b"));
//! assert_eq!(deque.delete_rear(), Some("c"));
//! assert_eq!(deque.elements(), vec!["a"]);
//! ```
//!
//! ## `Rehydrate`
//!
//! ```rust
//! use linkline::linked::{LinkedDeque, Rehydrate};
//!
//! let stored = vec!["x".to_string(), "y".to_string()];
//! let mut deque = LinkedDeque::hydrate(stored);
//! deque.insert_front("w".to_string());
//! assert_eq!(deque.snapshot(), vec!["w", "x", "y"]);
//! ```

mod arena;
mod deque;
mod queue;
mod sequence;

pub use deque::LinkedDeque;
pub use deque::LinkedDequeIntoIterator;
pub use deque::LinkedDequeIterator;
pub use queue::LinkedQueue;
pub use queue::LinkedQueueIntoIterator;
pub use queue::LinkedQueueIterator;
pub use sequence::Rehydrate;

// Containers own their nodes outright, so they cross threads whenever the items do.
static_assertions::assert_impl_all!(LinkedQueue<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(LinkedDeque<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(LinkedQueue<std::rc::Rc<String>>: Send, Sync);
static_assertions::assert_not_impl_any!(LinkedDeque<std::rc::Rc<String>>: Send, Sync);
