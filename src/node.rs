//! Node storage for the B-tree.
//!
//! A node is pure storage: sorted keys plus child ids. All algorithmic
//! mutation (shift-insert, split, borrow, merge) is performed by the tree
//! through direct slot manipulation, so the node itself only answers
//! occupancy and shape questions.

use crate::types::NodeId;

/// A single B-tree node: up to `order - 1` sorted keys and, when internal,
/// `keys.len() + 1` child ids.
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Sorted list of keys, strictly increasing.
    pub(crate) keys: Vec<K>,
    /// Child node ids; empty iff this node is a leaf.
    pub(crate) children: Vec<NodeId>,
}

// Manual impl: the derive would demand `K: Default` for fields that never
// hold a bare `K`. The arena parks `Node::default()` in freed slots.
impl<K> Default for Node<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl<K> Node<K> {
    /// Creates a new empty leaf node, pre-allocated for `order` keys.
    pub(crate) fn new_leaf(order: usize) -> Self {
        Self {
            keys: Vec::with_capacity(order - 1),
            children: Vec::new(),
        }
    }

    /// Creates a new empty internal node, pre-allocated for `order` children.
    pub(crate) fn new_internal(order: usize) -> Self {
        Self {
            keys: Vec::with_capacity(order - 1),
            children: Vec::with_capacity(order),
        }
    }

    /// Returns true if this node has no children.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of keys currently stored.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_shape_predicates() {
        let leaf: Node<i32> = Node::new_leaf(5);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.len(), 0);

        let mut internal: Node<i32> = Node::new_internal(5);
        internal.keys.push(10);
        internal.children.push(0);
        internal.children.push(1);
        assert!(!internal.is_leaf());
        assert_eq!(internal.len(), 1);
    }

    #[test]
    fn test_node_preallocation() {
        let leaf: Node<i32> = Node::new_leaf(8);
        assert!(leaf.keys.capacity() >= 7);
        let internal: Node<i32> = Node::new_internal(8);
        assert!(internal.children.capacity() >= 8);
    }
}
