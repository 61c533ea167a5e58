//! Core types for the B-tree.
//!
//! The tree owns a single arena of nodes and refers to them by id; parent and
//! child relations are id fields rather than pointers, so reseating several
//! links during a split or merge can never leave a dangling child.

use crate::arena::Arena;
use crate::node::Node;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum order for any B-tree.
///
/// Order 3 cannot keep both halves of a proactive split non-empty (splitting
/// a full 2-key node yields one key, the promoted median, and nothing), so 4
/// is the effective minimum.
pub const MIN_ORDER: usize = 4;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Id of the missing node: an empty tree's root, a leaf's child slot.
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURE
// ============================================================================

/// A classic in-memory B-tree set with configurable order.
///
/// The order `M` fixes the fan-out at construction: every node holds at most
/// `M - 1` keys, and every internal node with `k` keys has `k + 1` children.
/// Keys are stored at every level (this is a B-tree, not a B+ tree) and each
/// key appears exactly once; the tree is a set.
///
/// # Type Parameters
///
/// * `K` - Key type; needs `Ord + Clone`. `Display` is only required by
///   [`join`](BTree::join).
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new(5).unwrap();
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
///
/// assert!(tree.contains(&12));
/// assert_eq!(tree.size(), 8);
/// assert_eq!(tree.join(","), "5,6,7,10,12,17,20,30");
/// assert_eq!(tree.min_key(), Ok(&5));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion / lookup / deletion**: O(log n) node visits, O(log M)
///   comparisons per node
/// - **Range queries**: O(log n + k) where k is the number of keys in range
///
/// All operations run to completion on the calling thread; the tree provides
/// no internal synchronization.
#[derive(Debug)]
pub struct BTree<K> {
    /// Order of the tree: maximum number of children per internal node.
    pub(crate) order: usize,
    /// Root node id, or `NULL_NODE` when the tree holds no keys.
    pub(crate) root: NodeId,
    /// Number of keys currently stored.
    pub(crate) size: usize,
    /// Arena storage for every node in the tree.
    pub(crate) arena: Arena<Node<K>>,
}

impl<K> BTree<K> {
    // ============================================================================
    // CAPACITY BOUNDS
    // ============================================================================

    /// Maximum number of keys any node may hold: `order - 1`.
    #[inline]
    pub(crate) fn max_keys(&self) -> usize {
        self.order - 1
    }

    /// Minimum number of keys a non-root node must hold: `(order - 2) / 2`.
    ///
    /// This is the largest bound both halves of a proactive split can satisfy:
    /// splitting a full node leaves `order - 2` keys to share after the median
    /// is promoted. For even orders it equals the textbook `(order - 1) / 2`.
    #[inline]
    pub(crate) fn min_keys(&self) -> usize {
        (self.order - 2) / 2
    }
}
