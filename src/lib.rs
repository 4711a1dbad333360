//! # linkline
//!
//! Pointer-linked containers with O(1) mutation at their ends.
//!
//! ## Overview
//!
//! This library provides two classic linked-list based data structures:
//!
//! - **`LinkedQueue`**: FIFO container over a singly-linked chain with head and tail links
//! - **`LinkedDeque`**: double-ended container over a doubly-linked chain with front and rear links
//!
//! Both containers keep their nodes in an index arena, so the backward links of the
//! deque are plain indices and never own the node they point at.
//!
//! Removals on an empty container return `None` rather than failing.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize containers as sequences, front to rear
//!
//! ## Example
//!
//! ```rust
//! use linkline::prelude::*;
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.elements(), vec!["b"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers and the load/persist contract.
///
/// # Usage
///
/// ```rust
/// use linkline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::linked::*;
}

pub mod linked;
