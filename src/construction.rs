//! Construction and initialization for the B-tree.
//!
//! Order validation, the default-order constructor, and bulk construction
//! from an already-sorted vector all live here.

use crate::arena::Arena;
use crate::error::{BTreeError, BTreeResult, InitResult};
use crate::types::{BTree, MIN_ORDER, NULL_NODE};

/// Default order for trees built without an explicit one.
pub const DEFAULT_ORDER: usize = 16;

impl<K: Ord + Clone> BTree<K> {
    /// Create an empty B-tree of the given order.
    ///
    /// # Arguments
    ///
    /// * `order` - Maximum number of children per internal node (minimum 4)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the order is valid, `Err(BTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i32>::new(5).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<i32>::new(3).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        if order < MIN_ORDER {
            return Err(BTreeError::invalid_order(order, MIN_ORDER));
        }

        Ok(Self {
            order,
            root: NULL_NODE,
            size: 0,
            arena: Arena::new(),
        })
    }

    /// Create an empty B-tree with the default order.
    ///
    /// Equivalent to `new(DEFAULT_ORDER)`.
    pub fn with_default_order() -> InitResult<Self> {
        Self::new(DEFAULT_ORDER)
    }

    /// Build a tree from an ordered vector by repeated insertion.
    ///
    /// The ordered precondition is not exploited for a bottom-up bulk load;
    /// this is intentionally the simple path, and duplicates in the input are
    /// silently dropped. An empty input yields an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::from_ordered_vec(vec![1, 2, 3, 4, 5], 4).unwrap();
    /// assert_eq!(tree.size(), 5);
    /// assert!(tree.check_properties());
    /// ```
    pub fn from_ordered_vec(elements: Vec<K>, order: usize) -> InitResult<Self> {
        let mut tree = Self::new(order)?;
        for element in elements {
            tree.insert(element);
        }
        Ok(tree)
    }
}

impl<K: Ord + Clone> Default for BTree<K> {
    /// Create a B-tree with the default order.
    fn default() -> Self {
        Self::with_default_order().expect("default order is valid")
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that an order is suitable for a B-tree.
    pub fn validate_order(order: usize) -> BTreeResult<()> {
        if order < MIN_ORDER {
            Err(BTreeError::invalid_order(order, MIN_ORDER))
        } else {
            Ok(())
        }
    }

    /// Get the recommended order for a given expected number of keys.
    ///
    /// Heuristic only: higher orders mean fewer levels but more comparisons
    /// and shifting per node.
    pub fn recommended_order(expected_keys: usize) -> usize {
        if expected_keys < 100 {
            MIN_ORDER
        } else if expected_keys < 10_000 {
            16
        } else if expected_keys < 1_000_000 {
            32
        } else {
            64
        }
    }
}
