//! Error handling and result types for B-tree operations.
//!
//! The error taxonomy is deliberately small: only `min_key`/`max_key` ever
//! surface an error during normal operation. Everything else degrades to a
//! defined trivial result, and structural problems are reported through the
//! validation routines rather than thrown.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// The tree holds no keys, so there is no minimum or maximum.
    EmptyTree,
    /// Invalid order specified at construction.
    InvalidOrder(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Arena bookkeeping disagrees with the tree structure.
    ArenaError(String),
}

impl BTreeError {
    /// Create an InvalidOrder error with context
    pub fn invalid_order(order: usize, min_required: usize) -> Self {
        Self::InvalidOrder(format!(
            "Order {} is invalid (minimum required: {})",
            order, min_required
        ))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Check if this error is an order error
    pub fn is_order_error(&self) -> bool {
        matches!(self, Self::InvalidOrder(_))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::EmptyTree => write!(f, "Tree is empty"),
            BTreeError::InvalidOrder(msg) => write!(f, "Invalid order: {}", msg),
            BTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            BTreeError::ArenaError(msg) => write!(f, "Arena error: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, BTreeError>;

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for key lookup operations (`min_key`/`max_key`)
pub type KeyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;
