//! Insertion with proactive top-down splitting.
//!
//! Before walking into any child, a full child is split first, so the node
//! about to be entered always has spare capacity and the descent never
//! backtracks. The root is the only node whose split grows the tree's height.

use std::cmp::Ordering;

use crate::node::Node;
use crate::types::{BTree, NodeId, NULL_NODE};

impl<K: Ord + Clone> BTree<K> {
    /// Insert a key into the tree.
    ///
    /// Returns `true` if the key was inserted, `false` if it was already
    /// present (the tree is a set; duplicates are not stored and `size` does
    /// not change).
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(4).unwrap();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        if self.root == NULL_NODE {
            let mut leaf = Node::new_leaf(self.order);
            leaf.keys.push(key);
            self.root = self.arena.allocate(leaf);
            self.size += 1;
            return true;
        }

        if self.node(self.root).len() == self.max_keys() {
            self.grow_root();
        }

        let root = self.root;
        let inserted = self.insert_non_full(root, key);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    // ============================================================================
    // INSERTION HELPERS
    // ============================================================================

    /// Grow the tree by one level: the old root becomes the only child of a
    /// fresh root, then gets split.
    fn grow_root(&mut self) {
        let mut new_root = Node::new_internal(self.order);
        new_root.children.push(self.root);
        let new_root_id = self.arena.allocate(new_root);
        self.split_child(new_root_id, 0);
        self.root = new_root_id;
    }

    /// Recursive insertion step; `id` is guaranteed to have spare capacity.
    fn insert_non_full(&mut self, id: NodeId, key: K) -> bool {
        let (is_leaf, index) = {
            let node = self.node(id);
            match node.keys.binary_search(&key) {
                Ok(_) => return false,
                Err(index) => (node.is_leaf(), index),
            }
        };

        if is_leaf {
            self.node_mut(id).keys.insert(index, key);
            return true;
        }

        let mut index = index;
        let child = self.node(id).children[index];
        if self.node(child).len() == self.max_keys() {
            self.split_child(id, index);
            // The split promoted a median into this node; re-derive the
            // interval against it before descending.
            match key.cmp(&self.node(id).keys[index]) {
                Ordering::Equal => return false,
                Ordering::Greater => index += 1,
                Ordering::Less => {}
            }
        }

        let child = self.node(id).children[index];
        self.insert_non_full(child, key)
    }

    /// Split the full child at `index` of `parent_id`.
    ///
    /// With `mid = (order - 1) / 2`, the left half keeps keys `[0, mid)`, the
    /// key at `mid` is promoted into the parent at `index`, and a new right
    /// sibling takes everything past `mid` plus the trailing child ids.
    fn split_child(&mut self, parent_id: NodeId, index: usize) {
        let mid = (self.order - 1) / 2;
        let child_id = self.node(parent_id).children[index];

        let (median, right) = {
            let child = self.node_mut(child_id);
            let median = child.keys[mid].clone();
            let right_keys = child.keys.split_off(mid + 1);
            child.keys.pop(); // the promoted median leaves the left half
            let right_children = if child.is_leaf() {
                Vec::new()
            } else {
                child.children.split_off(mid + 1)
            };
            (
                median,
                Node {
                    keys: right_keys,
                    children: right_children,
                },
            )
        };

        let right_id = self.arena.allocate(right);
        let parent = self.node_mut(parent_id);
        parent.keys.insert(index, median);
        parent.children.insert(index + 1, right_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty_tree() {
        let mut tree = BTree::new(4).unwrap();
        assert!(tree.insert(42));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.height(), 1);
        assert!(tree.contains(&42));
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let mut tree = BTree::new(4).unwrap();
        for key in 0..20 {
            assert!(tree.insert(key));
        }
        for key in 0..20 {
            assert!(!tree.insert(key), "duplicate {} accepted", key);
        }
        assert_eq!(tree.size(), 20);
        assert!(tree.check_properties());
    }

    #[test]
    fn test_root_split_grows_height_by_one() {
        let mut tree = BTree::new(4).unwrap();
        for key in [1, 2, 3] {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 1);
        tree.insert(4);
        assert_eq!(tree.height(), 2);
        assert!(tree.check_properties());
    }

    #[test]
    fn test_worked_example_shape() {
        // Order 5: inserting 10,20,5,6,12,30,7,17 ends with root [10] over
        // [5,6,7] and [12,17,20,30].
        let mut tree = BTree::new(5).unwrap();
        for key in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(key);
        }
        assert_eq!(tree.root_keys(), vec![&10]);
        assert_eq!(tree.size(), 8);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.node_count(), 3);
        assert!(tree.check_properties());
    }

    #[test]
    fn test_descending_inserts_stay_valid() {
        let mut tree = BTree::new(4).unwrap();
        for key in (0..200).rev() {
            tree.insert(key);
            assert!(tree.check_properties());
        }
        assert_eq!(tree.size(), 200);
    }
}
