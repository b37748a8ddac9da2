//! Error types for the balanced tree.
//!
//! The tree has a single failure mode: inserting a key that is already
//! present. It is never fatal. [`BalancedTree::insert`] reports it through
//! [`InsertOutcome::Duplicate`], while [`BalancedTree::try_insert`] surfaces it
//! as a [`DuplicateKeyError`] so callers can propagate it with `?`.
//!
//! [`BalancedTree::insert`]: crate::tree::BalancedTree::insert
//! [`BalancedTree::try_insert`]: crate::tree::BalancedTree::try_insert
//! [`InsertOutcome::Duplicate`]: crate::tree::InsertOutcome::Duplicate

/// Returned when a key is inserted into a tree that already holds it.
///
/// The rejected key is handed back to the caller, and the tree is left
/// exactly as it was before the call.
///
/// # Examples
///
/// ```rust
/// use balanced_tree::{BalancedTree, DuplicateKeyError};
///
/// let mut tree = BalancedTree::new();
/// assert!(tree.try_insert(7).is_ok());
///
/// let error = tree.try_insert(7).unwrap_err();
/// assert_eq!(error, DuplicateKeyError { key: 7 });
/// assert_eq!(format!("{error}"), "duplicate key 7 not allowed in balanced tree");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate key {key} not allowed in balanced tree")]
pub struct DuplicateKeyError<K> {
    /// The key that was rejected.
    pub key: K,
}

impl<K> DuplicateKeyError<K> {
    /// Consumes the error and returns the rejected key.
    #[inline]
    #[must_use]
    pub fn into_key(self) -> K {
        self.key
    }
}
