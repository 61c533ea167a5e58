//! Invariant checking and debugging utilities.
//!
//! `check_properties` is the oracle for the test suite: it verifies strict
//! in-node ordering, occupancy bounds, uniform leaf depth, separator ranges,
//! size accounting, and arena/tree consistency. It never runs as part of a
//! normal operation.

use crate::error::{BTreeError, TreeResult};
use crate::types::{BTree, NodeId, NULL_NODE};

impl<K: Ord + Clone> BTree<K> {
    // ============================================================================
    // VALIDATION
    // ============================================================================

    /// Check whether the tree maintains all B-tree invariants.
    ///
    /// Returns `true` for an empty tree.
    pub fn check_properties(&self) -> bool {
        self.check_properties_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_properties_detailed(&self) -> Result<(), String> {
        if self.root == NULL_NODE {
            if self.size != 0 {
                return Err(format!("empty tree reports size {}", self.size));
            }
            if self.arena.allocated_count() != 0 {
                return Err(format!(
                    "empty tree holds {} allocated nodes",
                    self.arena.allocated_count()
                ));
            }
            return Ok(());
        }

        let mut leaf_depth = None;
        let mut total_keys = 0;
        let mut reachable_nodes = 0;
        self.check_node(
            self.root,
            0,
            &mut leaf_depth,
            None,
            None,
            true,
            &mut total_keys,
            &mut reachable_nodes,
        )?;

        if total_keys != self.size {
            return Err(format!(
                "tree holds {} keys but size is {}",
                total_keys, self.size
            ));
        }

        self.check_arena_consistency(reachable_nodes)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Recursively check invariants for a node and its children.
    #[allow(clippy::too_many_arguments)]
    fn check_node(
        &self,
        id: NodeId,
        depth: usize,
        leaf_depth: &mut Option<usize>,
        lower: Option<&K>,
        upper: Option<&K>,
        is_root: bool,
        total_keys: &mut usize,
        reachable_nodes: &mut usize,
    ) -> Result<(), String> {
        let node = self
            .arena
            .get(id)
            .ok_or_else(|| format!("node {} referenced but not allocated", id))?;
        *reachable_nodes += 1;
        *total_keys += node.keys.len();

        if node.keys.is_empty() {
            return Err(format!("node {} is empty", id));
        }
        if node.keys.len() > self.max_keys() {
            return Err(format!(
                "node {} holds {} keys, maximum is {}",
                id,
                node.keys.len(),
                self.max_keys()
            ));
        }
        if !is_root && node.keys.len() < self.min_keys() {
            return Err(format!(
                "non-root node {} holds {} keys, minimum is {}",
                id,
                node.keys.len(),
                self.min_keys()
            ));
        }

        if node.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(format!("node {} keys are not strictly sorted", id));
        }

        // Separator bounds are open on both ends
        if let Some(low) = lower {
            if node.keys.first().map(|first| first <= low).unwrap_or(false) {
                return Err(format!("node {} violates its lower separator bound", id));
            }
        }
        if let Some(high) = upper {
            if node.keys.last().map(|last| last >= high).unwrap_or(false) {
                return Err(format!("node {} violates its upper separator bound", id));
            }
        }

        if node.is_leaf() {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(format!(
                        "leaf {} at depth {}, other leaves at depth {}",
                        id, depth, expected
                    ));
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if node.children.len() != node.keys.len() + 1 {
            return Err(format!(
                "internal node {} has {} keys but {} children",
                id,
                node.keys.len(),
                node.children.len()
            ));
        }

        for (index, &child) in node.children.iter().enumerate() {
            let child_lower = if index == 0 {
                lower
            } else {
                Some(&node.keys[index - 1])
            };
            let child_upper = if index == node.keys.len() {
                upper
            } else {
                Some(&node.keys[index])
            };
            self.check_node(
                child,
                depth + 1,
                leaf_depth,
                child_lower,
                child_upper,
                false,
                total_keys,
                reachable_nodes,
            )?;
        }

        Ok(())
    }

    /// Check that arena bookkeeping matches the reachable tree structure.
    fn check_arena_consistency(&self, reachable_nodes: usize) -> TreeResult<()> {
        let stats = self.arena.stats();
        if reachable_nodes != stats.allocated_count {
            return Err(BTreeError::arena_error(
                "consistency check",
                &format!(
                    "{} nodes reachable vs {} allocated",
                    reachable_nodes, stats.allocated_count
                ),
            ));
        }
        Ok(())
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Keys of the root node, in order (for testing/debugging).
    pub fn root_keys(&self) -> Vec<&K> {
        if self.root == NULL_NODE {
            return Vec::new();
        }
        self.node(self.root).keys.iter().collect()
    }

    /// Number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        if self.root == NULL_NODE {
            return 0;
        }
        self.count_nodes(self.root)
    }

    fn count_nodes(&self, id: NodeId) -> usize {
        let node = self.node(id);
        1 + node
            .children
            .iter()
            .map(|&child| self.count_nodes(child))
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_passes() {
        let tree = BTree::<i32>::new(4).unwrap();
        assert!(tree.check_properties());
        assert!(tree.check_properties_detailed().is_ok());
        assert_eq!(tree.node_count(), 0);
        assert!(tree.root_keys().is_empty());
    }

    #[test]
    fn test_populated_tree_passes() {
        let tree = BTree::from_ordered_vec((0..500).collect(), 6).unwrap();
        assert!(tree.check_properties_detailed().is_ok());
    }

    #[test]
    fn test_detects_size_drift() {
        let mut tree = BTree::from_ordered_vec((0..10).collect(), 4).unwrap();
        tree.size += 1;
        let err = tree.check_properties_detailed().unwrap_err();
        assert!(err.contains("size"), "unexpected report: {}", err);
        assert!(!tree.check_properties());
    }

    #[test]
    fn test_detects_unsorted_keys() {
        // Order 8 keeps 0..6 in a single root leaf with six keys.
        let mut tree = BTree::from_ordered_vec((0..6).collect(), 8).unwrap();
        let root = tree.root;
        tree.node_mut(root).keys.reverse();
        assert!(!tree.check_properties());
    }

    #[test]
    fn test_detects_leaked_node() {
        let mut tree = BTree::from_ordered_vec((0..10).collect(), 4).unwrap();
        // Allocate a node the tree never links in.
        tree.arena.allocate(crate::node::Node::new_leaf(4));
        let err = tree.check_properties_detailed().unwrap_err();
        assert!(err.contains("allocated"), "unexpected report: {}", err);
    }

    #[test]
    fn test_detects_separator_violation() {
        let mut tree = BTree::from_ordered_vec((0..50).collect(), 4).unwrap();
        let root = tree.root;
        let first_child = tree.node(root).children[0];
        let boundary = tree.node(root).keys[0].clone();
        tree.node_mut(first_child).keys.pop();
        tree.node_mut(first_child).keys.push(boundary + 1000);
        assert!(!tree.check_properties());
    }
}
