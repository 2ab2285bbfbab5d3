//! Errors returned by fallible [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// Everything that can go wrong when looking up or removing a value.
///
/// A failed operation never mutates the tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The requested value (or node) is not stored in the tree.
    #[error("value not found in tree")]
    NotFound,

    /// The operation needs a root but the tree is empty.
    #[error("tree is empty")]
    EmptyTree,
}

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
