//! Lookup operations: point search, min/max, height.

use crate::error::{BTreeError, KeyResult};
use crate::node::Node;
use crate::types::{BTree, NodeId, NULL_NODE};

impl<K: Ord + Clone> BTree<K> {
    // ============================================================================
    // PUBLIC LOOKUP OPERATIONS
    // ============================================================================

    /// Check whether a key is present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(4).unwrap();
    /// tree.insert(7);
    /// assert!(tree.contains(&7));
    /// assert!(!tree.contains(&8));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        let mut id = self.root;
        while id != NULL_NODE {
            let node = self.node(id);
            match node.keys.binary_search(key) {
                Ok(_) => return true,
                Err(index) => {
                    id = node.children.get(index).copied().unwrap_or(NULL_NODE);
                }
            }
        }
        false
    }

    /// Return the smallest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::EmptyTree`] if the tree holds no keys.
    pub fn min_key(&self) -> KeyResult<&K> {
        if self.root == NULL_NODE {
            return Err(BTreeError::EmptyTree);
        }
        let mut id = self.root;
        loop {
            let node = self.node(id);
            match node.children.first() {
                Some(&child) => id = child,
                None => {
                    return node
                        .keys
                        .first()
                        .ok_or_else(|| BTreeError::data_integrity("min_key", "leaf has no keys"))
                }
            }
        }
    }

    /// Return the largest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::EmptyTree`] if the tree holds no keys.
    pub fn max_key(&self) -> KeyResult<&K> {
        if self.root == NULL_NODE {
            return Err(BTreeError::EmptyTree);
        }
        let mut id = self.root;
        loop {
            let node = self.node(id);
            match node.children.last() {
                Some(&child) => id = child,
                None => {
                    return node
                        .keys
                        .last()
                        .ok_or_else(|| BTreeError::data_integrity("max_key", "leaf has no keys"))
                }
            }
        }
    }

    /// Height of the tree: 0 for an empty tree, 1 for a lone root leaf.
    ///
    /// All leaves sit at the same depth, so following the leftmost spine is
    /// enough.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut id = self.root;
        while id != NULL_NODE {
            height += 1;
            id = self.node(id).children.first().copied().unwrap_or(NULL_NODE);
        }
        height
    }

    // ============================================================================
    // ARENA ACCESS
    // ============================================================================

    /// Borrow a node by id. Every id stored in the tree is an invariant of
    /// the structure, so a miss is a bug, not a recoverable condition.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        self.arena.get(id).expect("node id not allocated in arena")
    }

    /// Mutably borrow a node by id.
    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.arena
            .get_mut(id)
            .expect("node id not allocated in arena")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_empty_tree() {
        let tree = BTree::<i32>::new(4).unwrap();
        assert!(!tree.contains(&1));
    }

    #[test]
    fn test_contains_across_levels() {
        let mut tree = BTree::new(4).unwrap();
        for key in 0..100 {
            tree.insert(key);
        }
        assert!(tree.height() > 1);
        for key in 0..100 {
            assert!(tree.contains(&key));
        }
        assert!(!tree.contains(&100));
        assert!(!tree.contains(&-1));
    }

    #[test]
    fn test_min_max_errors_on_empty() {
        let tree = BTree::<i32>::new(4).unwrap();
        assert_eq!(tree.min_key(), Err(BTreeError::EmptyTree));
        assert_eq!(tree.max_key(), Err(BTreeError::EmptyTree));
    }

    #[test]
    fn test_min_max() {
        let mut tree = BTree::new(5).unwrap();
        for key in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(key);
        }
        assert_eq!(tree.min_key(), Ok(&5));
        assert_eq!(tree.max_key(), Ok(&30));
    }

    #[test]
    fn test_height_growth() {
        let mut tree = BTree::new(4).unwrap();
        assert_eq!(tree.height(), 0);
        tree.insert(1);
        assert_eq!(tree.height(), 1);
        for key in 2..=4 {
            tree.insert(key);
        }
        // A fourth insert overflows the 3-key root leaf
        assert_eq!(tree.height(), 2);
    }
}
