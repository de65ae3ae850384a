//! Errors surfaced by fallible tree operations.

use std::collections::TryReserveError;

/// Result type for fallible tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while mutating a [`Tree`][crate::redblack::Tree].
///
/// These are reported before any structural change is made, so a tree that returned an error is
/// exactly the tree it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The arena could not grow to hold a new node.
    #[error("failed to allocate a tree node: {0}")]
    Alloc(#[from] TryReserveError),
}
