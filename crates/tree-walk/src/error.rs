//! Errors reported by traversal handles

use derive_more::{Display, Error};

/// Failure modes of a traversal handle
///
/// Errors raised inside a custom filter or a node's child accessor are not
/// represented here; they propagate to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TraversalError {
    /// A node was requested after the traversal produced its last one
    #[display(fmt = "traversal has no more nodes")]
    Exhausted,

    /// Traversals are read-only; removing or mutating through them is rejected
    #[display(fmt = "operation not supported by a read-only traversal")]
    Unsupported,
}

/// Result type for traversal operations
pub type Result<T> = std::result::Result<T, TraversalError>;
