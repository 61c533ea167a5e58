//! A classic in-memory B-tree set with configurable order.
//!
//! Keys live at every level of the tree (this is a B-tree, not a B+ tree) and
//! each key appears once; the tree is a set ordered by `K: Ord`. The order
//! `M` is fixed at construction and bounds every node to `M - 1` keys.
//! Insertion splits full nodes proactively on the way down; deletion fills
//! minimal children (borrow or merge) before descending, so neither ever
//! backtracks.
//!
//! Nodes are stored in an index-addressed arena with free-list reuse, and the
//! whole structure can be audited at any point with
//! [`check_properties`](BTree::check_properties).
//!
//! # Examples
//!
//! ```
//! use btree::BTree;
//!
//! let mut tree = BTree::new(5).unwrap();
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.join(","), "5,6,7,10,12,17,20,30");
//! assert_eq!(tree.range_search(&6, &17), vec![&6, &7, &10, &12, &17]);
//!
//! tree.remove(&10);
//! assert!(!tree.contains(&10));
//! assert!(tree.check_properties());
//! ```

mod arena;
mod construction;
mod delete;
mod error;
mod insert;
mod node;
mod search;
mod traversal;
mod types;
mod validation;

pub use arena::ArenaStats;
pub use construction::{validation as order_validation, DEFAULT_ORDER};
pub use error::{BTreeError, BTreeResult, InitResult, KeyResult};
pub use types::{BTree, NodeId, MIN_ORDER, NULL_NODE};

impl<K: Ord + Clone> BTree<K> {
    // ============================================================================
    // TOP-LEVEL API OPERATIONS
    // ============================================================================

    /// Number of keys currently in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The order `M` fixed at construction.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Remove every key from the tree.
    ///
    /// Nodes are torn down post-order through the arena free list; the tree
    /// is afterwards indistinguishable from a freshly constructed one.
    pub fn clear(&mut self) {
        if self.root != NULL_NODE {
            self.clear_recursive(self.root);
        }
        self.root = NULL_NODE;
        self.size = 0;
        self.arena.clear();
    }

    fn clear_recursive(&mut self, id: NodeId) {
        let children = self.node(id).children.clone();
        for child in children {
            self.clear_recursive(child);
        }
        self.arena.deallocate(id);
    }

    /// Occupancy statistics of the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}
