//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated preconditions of the tree toolkit.
///
/// Lookups that come up empty are not errors: `search`/`delete` report
/// absence through their return values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown traversal: {0} (expected inorder, preorder, postorder or level-order)")]
    UnknownTraversal(String),

    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("cannot draw {requested} distinct values from a range of {available}")]
    NotEnoughValues { requested: usize, available: u64 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
