//! # balanced-tree
//!
//! A self-balancing (AVL) binary search tree over unique, totally ordered
//! keys, with a read-only snapshot of its shape for external consumers such
//! as tree renderers.
//!
//! ## Overview
//!
//! - **[`BalancedTree`]**: ordered set with O(log N) insert, kept balanced by
//!   the four AVL rotation cases (LL, RR, LR, RL)
//! - **[`SnapshotNode`]**: detached, hierarchical view of the tree carrying
//!   each node's key, height and balance factor
//! - **[`DuplicateKeyError`]**: the only error, raised when a key is inserted
//!   twice
//!
//! Duplicate inserts are non-fatal: they leave the tree untouched, return
//! [`InsertOutcome::Duplicate`], and emit a `tracing` warning. The crate never
//! installs a subscriber; hosts decide where diagnostics go.
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`SnapshotNode`] in the
//!   `{"name", "balance", "height", "children"}` shape tree renderers expect
//!
//! ## Example
//!
//! ```rust
//! use balanced_tree::prelude::*;
//!
//! let mut tree = BalancedTree::new();
//! for key in [10, 30, 20] {
//!     tree.insert(key); // right-left case on the third insert
//! }
//!
//! let root = tree.snapshot().unwrap();
//! assert_eq!(root.key(), "20");
//! assert_eq!(root.height(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use balanced_tree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::tree::*;
}

pub mod error;
pub mod tree;

pub use error::DuplicateKeyError;
pub use tree::{BalancedTree, InsertOutcome, SnapshotNode};
