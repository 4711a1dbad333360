//! Slot arena backing the linked containers.
//!
//! Nodes are stored in a `Vec` of slots and addressed by [`NodeIndex`].
//! Removing a node vacates its slot and threads it onto a free list, so the
//! next insertion reuses it instead of growing the vector.

use std::ops::{Index, IndexMut};

/// Position of a node inside a [`NodeArena`].
pub(crate) type NodeIndex = usize;

#[derive(Clone)]
enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<NodeIndex> },
}

/// Owner of every node in one container.
#[derive(Clone)]
pub(crate) struct NodeArena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<NodeIndex>,
    occupied: usize,
}

impl<N> NodeArena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            occupied: 0,
        }
    }

    /// Stores `node` and returns the index it can be reached by.
    pub(crate) fn insert(&mut self, node: N) -> NodeIndex {
        self.occupied += 1;
        match self.free_head {
            Some(index) => {
                if let Slot::Vacant { next_free } = self.slots[index] {
                    self.free_head = next_free;
                }
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Takes the node out of `index`, leaving the slot free for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already vacant. Containers only remove indices
    /// they still link to, so this indicates a broken chain.
    pub(crate) fn remove(&mut self, index: NodeIndex) -> N {
        let vacated = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index], vacated) {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("arena slot {index} removed twice"),
        }
    }

    pub(crate) fn get(&self, index: NodeIndex) -> Option<&N> {
        match self.slots.get(index) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }
}

impl<N> Index<NodeIndex> for NodeArena<N> {
    type Output = N;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("arena slot {index} is vacant"),
        }
    }
}

impl<N> IndexMut<NodeIndex> for NodeArena<N> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("arena slot {index} is vacant"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
