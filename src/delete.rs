//! Deletion with pre-emptive rebalancing.
//!
//! Before descending into a child, the child is guaranteed to hold more than
//! the minimum via `fill` (borrow from the previous sibling, borrow from the
//! next, or merge, in that order), so the recursion never removes from an
//! already-minimal node. A key found in an internal node is replaced by its
//! predecessor or successor when the adjacent child has surplus, and deleted
//! from a merged child otherwise.

use crate::types::{BTree, NodeId, NULL_NODE};

impl<K: Ord + Clone> BTree<K> {
    /// Remove a key from the tree.
    ///
    /// Returns `true` if the key was present and removed; `false` leaves the
    /// tree (and `size`) untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(4).unwrap();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert_eq!(tree.size(), 0);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        if self.root == NULL_NODE {
            return false;
        }

        let root = self.root;
        let removed = self.remove_from(root, key);

        // An empty root hands the tree to its only child; this is the sole
        // height-shrinking event.
        if self.node(self.root).keys.is_empty() {
            let old_root = self.root;
            self.root = self
                .node(old_root)
                .children
                .first()
                .copied()
                .unwrap_or(NULL_NODE);
            self.arena.deallocate(old_root);
        }

        if removed {
            self.size -= 1;
        }
        removed
    }

    // ============================================================================
    // DELETION HELPERS
    // ============================================================================

    /// Recursive removal step; `id` holds more than `min_keys` keys unless it
    /// is the root.
    fn remove_from(&mut self, id: NodeId, key: &K) -> bool {
        let (search, is_leaf) = {
            let node = self.node(id);
            (node.keys.binary_search(key), node.is_leaf())
        };

        match search {
            Ok(index) => {
                if is_leaf {
                    self.node_mut(id).keys.remove(index);
                    true
                } else {
                    self.remove_from_internal(id, index, key)
                }
            }
            Err(index) => {
                if is_leaf {
                    // Key absent; nothing to do.
                    return false;
                }

                let mut index = index;
                let was_rightmost = index == self.node(id).len();
                let child = self.node(id).children[index];
                if self.node(child).len() <= self.min_keys() {
                    self.fill(id, index);
                    // A merge inside fill renumbers children; re-validate the
                    // interval instead of reusing the index blindly.
                    if was_rightmost && index > self.node(id).len() {
                        index -= 1;
                    }
                }
                let child = self.node(id).children[index];
                self.remove_from(child, key)
            }
        }
    }

    /// Remove `keys[index]` from the internal node `id`.
    fn remove_from_internal(&mut self, id: NodeId, index: usize, key: &K) -> bool {
        let left = self.node(id).children[index];
        let right = self.node(id).children[index + 1];

        if self.node(left).len() > self.min_keys() {
            let predecessor = self.rightmost_key(left);
            self.node_mut(id).keys[index] = predecessor.clone();
            self.remove_from(left, &predecessor)
        } else if self.node(right).len() > self.min_keys() {
            let successor = self.leftmost_key(right);
            self.node_mut(id).keys[index] = successor.clone();
            self.remove_from(right, &successor)
        } else {
            // Both children minimal: pull the key down into the merged child
            // and delete it there.
            self.merge_children(id, index);
            self.remove_from(left, key)
        }
    }

    /// Rightmost key of the subtree rooted at `id` (the predecessor source).
    fn rightmost_key(&self, mut id: NodeId) -> K {
        loop {
            let node = self.node(id);
            match node.children.last() {
                Some(&child) => id = child,
                None => {
                    return node
                        .keys
                        .last()
                        .expect("tree nodes are never empty")
                        .clone()
                }
            }
        }
    }

    /// Leftmost key of the subtree rooted at `id` (the successor source).
    fn leftmost_key(&self, mut id: NodeId) -> K {
        loop {
            let node = self.node(id);
            match node.children.first() {
                Some(&child) => id = child,
                None => {
                    return node
                        .keys
                        .first()
                        .expect("tree nodes are never empty")
                        .clone()
                }
            }
        }
    }

    /// Bring the minimal child at `index` above the minimum before descent:
    /// borrow from the previous sibling, borrow from the next, or merge.
    fn fill(&mut self, parent_id: NodeId, index: usize) {
        let parent_len = self.node(parent_id).len();

        if index > 0 {
            let left_sibling = self.node(parent_id).children[index - 1];
            if self.node(left_sibling).len() > self.min_keys() {
                self.borrow_from_prev(parent_id, index);
                return;
            }
        }

        if index < parent_len {
            let right_sibling = self.node(parent_id).children[index + 1];
            if self.node(right_sibling).len() > self.min_keys() {
                self.borrow_from_next(parent_id, index);
                return;
            }
        }

        if index < parent_len {
            self.merge_children(parent_id, index);
        } else {
            self.merge_children(parent_id, index - 1);
        }
    }

    /// Rotate the last key/child of the left sibling up through the parent
    /// separator into the front of the child at `index`.
    fn borrow_from_prev(&mut self, parent_id: NodeId, index: usize) {
        let child_id = self.node(parent_id).children[index];
        let sibling_id = self.node(parent_id).children[index - 1];

        let (moved_key, moved_child) = {
            let sibling = self.node_mut(sibling_id);
            let key = sibling.keys.pop().expect("donor sibling has a surplus key");
            let child = sibling.children.pop();
            (key, child)
        };

        let separator =
            std::mem::replace(&mut self.node_mut(parent_id).keys[index - 1], moved_key);

        let child = self.node_mut(child_id);
        child.keys.insert(0, separator);
        if let Some(id) = moved_child {
            child.children.insert(0, id);
        }
    }

    /// Symmetric rotation from the right sibling.
    fn borrow_from_next(&mut self, parent_id: NodeId, index: usize) {
        let child_id = self.node(parent_id).children[index];
        let sibling_id = self.node(parent_id).children[index + 1];

        let (moved_key, moved_child) = {
            let sibling = self.node_mut(sibling_id);
            let key = sibling.keys.remove(0);
            let child = if sibling.children.is_empty() {
                None
            } else {
                Some(sibling.children.remove(0))
            };
            (key, child)
        };

        let separator = std::mem::replace(&mut self.node_mut(parent_id).keys[index], moved_key);

        let child = self.node_mut(child_id);
        child.keys.push(separator);
        if let Some(id) = moved_child {
            child.children.push(id);
        }
    }

    /// Merge the child at `index`, the parent separator, and the next sibling
    /// into one node; the sibling's arena slot is freed.
    fn merge_children(&mut self, parent_id: NodeId, index: usize) {
        let (separator, child_id, sibling_id) = {
            let parent = self.node_mut(parent_id);
            let separator = parent.keys.remove(index);
            let sibling_id = parent.children.remove(index + 1);
            (separator, parent.children[index], sibling_id)
        };

        let mut sibling = self
            .arena
            .deallocate(sibling_id)
            .expect("merged sibling is allocated");

        let child = self.node_mut(child_id);
        child.keys.push(separator);
        child.keys.append(&mut sibling.keys);
        child.children.append(&mut sibling.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> BTree<i32> {
        let mut tree = BTree::new(5).unwrap();
        for key in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn test_remove_absent_key_is_a_noop() {
        let mut tree = sample_tree();
        assert!(!tree.remove(&99));
        assert_eq!(tree.size(), 8);
        assert!(tree.check_properties());

        let mut empty = BTree::<i32>::new(4).unwrap();
        assert!(!empty.remove(&1));
        assert_eq!(empty.size(), 0);
    }

    #[test]
    fn test_remove_internal_key_promotes_predecessor() {
        let mut tree = sample_tree();
        assert!(tree.remove(&10));
        assert!(!tree.contains(&10));
        assert_eq!(tree.size(), 7);
        // The left child had surplus, so its rightmost key replaces 10.
        assert_eq!(tree.root_keys(), vec![&7]);
        assert!(tree.check_properties());
    }

    #[test]
    fn test_remove_last_key_empties_tree() {
        let mut tree = BTree::new(4).unwrap();
        tree.insert(1);
        assert!(tree.remove(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.min_key(), Err(crate::BTreeError::EmptyTree));
    }

    #[test]
    fn test_remove_everything_ascending() {
        let mut tree = BTree::new(4).unwrap();
        for key in 0..100 {
            tree.insert(key);
        }
        for key in 0..100 {
            assert!(tree.remove(&key), "key {} missing", key);
            assert!(tree.check_properties(), "broken after removing {}", key);
            assert!(!tree.contains(&key));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_remove_everything_descending() {
        let mut tree = BTree::new(5).unwrap();
        for key in 0..100 {
            tree.insert(key);
        }
        for key in (0..100).rev() {
            assert!(tree.remove(&key));
            assert!(tree.check_properties(), "broken after removing {}", key);
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_interior_keys_triggers_merges() {
        let mut tree = BTree::new(4).unwrap();
        for key in 0..64 {
            tree.insert(key);
        }
        let before = tree.height();
        // Remove the middle half; plenty of borrows and merges on the way.
        for key in 16..48 {
            assert!(tree.remove(&key));
            assert!(tree.check_properties(), "broken after removing {}", key);
        }
        assert_eq!(tree.size(), 32);
        assert!(tree.height() <= before);
        for key in (0..16).chain(48..64) {
            assert!(tree.contains(&key));
        }
    }

    #[test]
    fn test_height_shrinks_via_root_collapse() {
        let mut tree = BTree::new(4).unwrap();
        for key in 0..30 {
            tree.insert(key);
        }
        let mut tallest = tree.height();
        for key in 0..30 {
            tree.remove(&key);
            let h = tree.height();
            assert!(h <= tallest);
            tallest = h;
        }
    }
}
