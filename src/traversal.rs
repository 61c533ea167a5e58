//! Inorder traversal, rendering, and range queries.

use std::fmt::Display;

use crate::types::{BTree, NodeId, NULL_NODE};

impl<K: Ord + Clone> BTree<K> {
    /// All keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::from_ordered_vec(vec![3, 1, 2], 4).unwrap();
    /// assert_eq!(tree.items(), vec![&1, &2, &3]);
    /// ```
    pub fn items(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.size);
        if self.root != NULL_NODE {
            self.collect_inorder(self.root, &mut out);
        }
        out
    }

    /// Render the keys in ascending order, joined by `separator`.
    ///
    /// An empty tree yields the empty string; there is no trailing separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::from_ordered_vec(vec![5, 6, 7], 4).unwrap();
    /// assert_eq!(tree.join(","), "5,6,7");
    /// assert_eq!(BTree::<i32>::new(4).unwrap().join(","), "");
    /// ```
    pub fn join(&self, separator: &str) -> String
    where
        K: Display,
    {
        self.items()
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// All keys in `[begin, end]` inclusive, in ascending order.
    ///
    /// The walk is pruned on both ends: subtrees entirely below `begin` are
    /// skipped, and descent stops once a key exceeds `end`. Returns an empty
    /// vector for an empty tree, a disjoint range, or `begin > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::from_ordered_vec((1..=10).collect(), 4).unwrap();
    /// assert_eq!(tree.range_search(&4, &7), vec![&4, &5, &6, &7]);
    /// assert!(tree.range_search(&7, &4).is_empty());
    /// ```
    pub fn range_search(&self, begin: &K, end: &K) -> Vec<&K> {
        let mut out = Vec::new();
        if self.root != NULL_NODE {
            self.collect_range(self.root, begin, end, &mut out);
        }
        out
    }

    // ============================================================================
    // TRAVERSAL HELPERS
    // ============================================================================

    /// Interleave child subtrees and keys: child i, key i, ..., last child.
    fn collect_inorder<'a>(&'a self, id: NodeId, out: &mut Vec<&'a K>) {
        let node = self.node(id);
        for (index, key) in node.keys.iter().enumerate() {
            if let Some(&child) = node.children.get(index) {
                self.collect_inorder(child, out);
            }
            out.push(key);
        }
        if let Some(&child) = node.children.get(node.keys.len()) {
            self.collect_inorder(child, out);
        }
    }

    /// Inorder walk pruned to `[begin, end]`.
    fn collect_range<'a>(&'a self, id: NodeId, begin: &K, end: &K, out: &mut Vec<&'a K>) {
        let node = self.node(id);
        // First key >= begin; everything left of it is out of range, except
        // that child `start` may still straddle the boundary.
        let start = node.keys.partition_point(|key| key < begin);

        for index in start..node.keys.len() {
            if let Some(&child) = node.children.get(index) {
                self.collect_range(child, begin, end, out);
            }
            let key = &node.keys[index];
            if key > end {
                return;
            }
            out.push(key);
        }

        if let Some(&child) = node.children.get(node.keys.len()) {
            self.collect_range(child, begin, end, out);
        }
    }
}
