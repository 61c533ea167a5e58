//! Index-addressed arena for tree nodes.
//!
//! Nodes are stored in a flat `Vec<T>` and addressed by `NodeId`. Freed slots
//! go on a free list and are reused by later allocations, so split/merge churn
//! does not grow the backing storage. An allocation mask keeps stale ids from
//! reading freed slots.

use std::convert::TryFrom;

use crate::types::{NodeId, NULL_NODE};

/// Occupancy statistics for an arena.
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub allocated_count: usize,
    pub free_count: usize,
    pub total_slots: usize,
}

/// Arena allocator backed by a `Vec<T>` with free-list slot reuse.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    /// Direct storage; freed slots hold `T::default()` until reused.
    storage: Vec<T>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Track which slots are actually allocated
    allocated_mask: Vec<bool>,
}

impl<T: Default> Arena<T> {
    /// Create a new empty arena
    pub(crate) fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated_mask: Vec::new(),
        }
    }

    /// Allocate a new item in the arena and return its ID
    pub(crate) fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            // Reuse a free slot
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            // Allocate new slot
            let index = self.storage.len();
            self.storage.push(item);
            self.allocated_mask.push(true);
            index
        };

        NodeId::try_from(index).expect("arena index exceeds NodeId range")
    }

    /// Deallocate an item from the arena and return it
    pub(crate) fn deallocate(&mut self, id: NodeId) -> Option<T> {
        if id == NULL_NODE {
            return None;
        }

        let index = usize::try_from(id).ok()?;
        if !self.allocated_mask.get(index).copied().unwrap_or(false) {
            return None;
        }

        // Mark as free and take the value out
        self.allocated_mask[index] = false;
        self.free_list.push(index);
        Some(std::mem::take(&mut self.storage[index]))
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        let index = usize::try_from(id).ok()?;
        if self.allocated_mask.get(index).copied().unwrap_or(false) {
            Some(&self.storage[index])
        } else {
            None
        }
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = usize::try_from(id).ok()?;
        if self.allocated_mask.get(index).copied().unwrap_or(false) {
            Some(&mut self.storage[index])
        } else {
            None
        }
    }

    /// Check if an ID is valid and allocated
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        if id == NULL_NODE {
            return false;
        }
        let index = usize::try_from(id).unwrap_or(usize::MAX);
        self.allocated_mask.get(index).copied().unwrap_or(false)
    }

    /// Get the number of allocated items
    pub(crate) fn allocated_count(&self) -> usize {
        self.storage.len() - self.free_list.len()
    }

    /// Get the number of free slots
    pub(crate) fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Get arena statistics
    pub(crate) fn stats(&self) -> ArenaStats {
        ArenaStats {
            allocated_count: self.allocated_count(),
            free_count: self.free_count(),
            total_slots: self.storage.len(),
        }
    }

    /// Clear all items from the arena
    pub(crate) fn clear(&mut self) {
        self.storage.clear();
        self.allocated_mask.clear();
        self.free_list.clear();
    }
}

impl<T: Default> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
