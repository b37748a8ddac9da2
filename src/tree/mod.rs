//! Self-balancing (AVL) binary search tree.
//!
//! This module provides [`BalancedTree`], an ordered set of unique keys that
//! keeps its height logarithmic by rotating subtrees on the way back up from
//! every insertion, and [`SnapshotNode`], the read-only view of its shape.
//!
//! # Overview
//!
//! - O(log N) insert
//! - O(log N) contains
//! - O(1) len, `is_empty`, height, root balance
//! - O(N) snapshot
//!
//! # Examples
//!
//! ```rust
//! use balanced_tree::{BalancedTree, InsertOutcome};
//!
//! let mut tree = BalancedTree::new();
//! assert_eq!(tree.insert(30), InsertOutcome::Inserted);
//! tree.insert(20);
//! tree.insert(10); // left-left case: rotates right around 30
//!
//! let root = tree.snapshot().unwrap();
//! assert_eq!(root.key(), "20");
//! assert_eq!(root.balance(), 0);
//!
//! // Duplicates are rejected and leave the tree untouched
//! assert_eq!(tree.insert(20), InsertOutcome::Duplicate);
//! assert_eq!(tree.len(), 3);
//! ```
//!
//! # Internal Structure
//!
//! After every public operation the tree satisfies:
//! 1. Every key in a left subtree is smaller than its parent's key, every key
//!    in a right subtree is larger
//! 2. Each node caches `1 + max(height(left), height(right))`, with the
//!    absent subtree having height 0
//! 3. The heights of each node's two subtrees differ by at most one
//! 4. No key appears twice
//!
//! Nodes own their children through `Option<Box<_>>`. Every mutation moves a
//! child out of its slot, transforms it, and writes the returned subtree root
//! back, so no node is ever aliased.

mod node;
mod rotation;
mod snapshot;

pub use snapshot::SnapshotNode;

use std::cmp::Ordering;
use std::fmt;

use crate::error::DuplicateKeyError;
use node::{Link, Node};
use rotation::Imbalance;

// =============================================================================
// InsertOutcome Definition
// =============================================================================

/// What an insertion did to the tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InsertOutcome {
    /// The key was new and now lives in the tree.
    Inserted,
    /// The key was already present; the tree is unchanged.
    Duplicate,
}

impl InsertOutcome {
    /// Returns `true` if the key was added.
    #[inline]
    #[must_use]
    pub const fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }

    /// Returns `true` if the key was rejected as a duplicate.
    #[inline]
    #[must_use]
    pub const fn is_duplicate(self) -> bool {
        matches!(self, Self::Duplicate)
    }
}

// =============================================================================
// BalancedTree Definition
// =============================================================================

/// An ordered set of unique keys stored as an AVL tree.
///
/// Keys must implement `Ord`. Inserting a key that is already present is a
/// no-op that is reported both through the returned [`InsertOutcome`] and as
/// a `tracing` warning.
///
/// The tree is only observable through queries ([`len`], [`contains`],
/// [`height`]) and through [`snapshot`], which copies out its current shape.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `insert`     | O(log N)   |
/// | `try_insert` | O(log N)   |
/// | `contains`   | O(log N)   |
/// | `len`        | O(1)       |
/// | `height`     | O(1)       |
/// | `balance`    | O(1)       |
/// | `snapshot`   | O(N)       |
///
/// # Examples
///
/// ```rust
/// use balanced_tree::BalancedTree;
///
/// let tree: BalancedTree<i32> = (1..=7).collect();
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.height(), 3);
/// assert!(tree.contains(&4));
/// ```
///
/// [`len`]: BalancedTree::len
/// [`contains`]: BalancedTree::contains
/// [`height`]: BalancedTree::height
/// [`snapshot`]: BalancedTree::snapshot
#[derive(Clone, Debug)]
pub struct BalancedTree<K> {
    /// Root node of the tree
    root: Link<K>,
    /// Number of keys
    length: usize,
}

static_assertions::assert_impl_all!(BalancedTree<i32>: Send, Sync, Clone, Default);

impl<K> BalancedTree<K> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = BalancedTree::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.snapshot().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of keys in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref())
    }

    /// Returns the balance factor of the root: 0 when empty.
    #[inline]
    #[must_use]
    pub fn balance(&self) -> isize {
        node::balance_factor(self.root.as_deref())
    }
}

impl<K: Ord> BalancedTree<K> {
    /// Returns `true` if the tree contains `key`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        Self::contains_in_node(self.root.as_deref(), key)
    }

    /// Recursive helper for contains.
    fn contains_in_node(node: Option<&Node<K>>, key: &K) -> bool {
        node.is_some_and(|node_ref| match key.cmp(&node_ref.key) {
            Ordering::Less => Self::contains_in_node(node_ref.left.as_deref(), key),
            Ordering::Greater => Self::contains_in_node(node_ref.right.as_deref(), key),
            Ordering::Equal => true,
        })
    }
}

impl<K: Ord + fmt::Debug> BalancedTree<K> {
    /// Inserts a key, rebalancing the tree as needed.
    ///
    /// The key is moved into its node; it is never cloned. `K: Debug` is only
    /// needed to record a rejected key in the duplicate warning.
    ///
    /// A key that is already present is not inserted again: the call returns
    /// [`InsertOutcome::Duplicate`], logs a warning, and leaves every node
    /// (and every cached height) exactly as it was.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::{BalancedTree, InsertOutcome};
    ///
    /// let mut tree = BalancedTree::new();
    /// assert!(tree.insert(10).is_inserted());
    /// assert!(tree.insert(20).is_inserted());
    /// assert_eq!(tree.insert(10), InsertOutcome::Duplicate);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> InsertOutcome {
        match self.insert_key(key) {
            Ok(()) => InsertOutcome::Inserted,
            Err(_) => InsertOutcome::Duplicate,
        }
    }

    /// Inserts a key, returning an error if it is already present.
    ///
    /// Behaves exactly like [`insert`](Self::insert) but hands the rejected key
    /// back inside a [`DuplicateKeyError`].
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] if the tree already contains `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.try_insert("b".to_string()).unwrap();
    ///
    /// let rejected = tree.try_insert("b".to_string()).unwrap_err().into_key();
    /// assert_eq!(rejected, "b");
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<(), DuplicateKeyError<K>> {
        self.insert_key(key).map_err(|key| DuplicateKeyError { key })
    }

    fn insert_key(&mut self, key: K) -> Result<(), K> {
        let (root, placement) = Self::insert_into(self.root.take(), key);
        self.root = Some(root);

        match placement {
            Placement::Rejected(key) => {
                tracing::warn!(?key, "duplicate key not allowed in balanced tree");
                Err(key)
            }
            Placement::Root | Placement::Below(_) => {
                self.length += 1;
                Ok(())
            }
        }
    }

    /// Recursive helper for insert.
    ///
    /// Returns the new root of the subtree that was in `node`'s slot and where
    /// the key ended up relative to it. On a duplicate the subtree comes back
    /// untouched with the key, and no ancestor on the way up recomputes its
    /// height or rotates.
    fn insert_into(node: Link<K>, key: K) -> (Box<Node<K>>, Placement<K>) {
        let Some(mut node) = node else {
            return (Box::new(Node::leaf(key)), Placement::Root);
        };

        let side = key.cmp(&node.key);
        let child_placement = match side {
            Ordering::Less => {
                let (new_left, placement) = Self::insert_into(node.left.take(), key);
                node.left = Some(new_left);
                placement
            }
            Ordering::Greater => {
                let (new_right, placement) = Self::insert_into(node.right.take(), key);
                node.right = Some(new_right);
                placement
            }
            Ordering::Equal => return (node, Placement::Rejected(key)),
        };

        let descent = match child_placement {
            Placement::Rejected(key) => return (node, Placement::Rejected(key)),
            Placement::Root => None,
            Placement::Below(child_side) => Some(child_side),
        };

        node.update_height();
        (Self::rebalance(node, descent), Placement::Below(side))
    }

    /// Restores the balance invariant at `node` after a key went in below it.
    fn rebalance(node: Box<Node<K>>, descent: Option<Ordering>) -> Box<Node<K>> {
        let Some(imbalance) = Imbalance::classify(&node, descent) else {
            return node;
        };

        tracing::trace!(case = %imbalance, "rebalancing subtree");
        let node = imbalance.resolve(node);
        debug_assert!(
            node.balance_factor().abs() <= 1,
            "subtree still unbalanced after rotation"
        );
        node
    }
}

/// Where an inserted key landed relative to one subtree.
enum Placement<K> {
    /// The key became the subtree's root, a fresh leaf.
    Root,
    /// The key went below the subtree's root, on the given side of its key.
    Below(Ordering),
    /// The subtree's root already holds the key, which is handed back.
    Rejected(K),
}

impl<K: fmt::Display> BalancedTree<K> {
    /// Copies out the current shape of the tree.
    ///
    /// Returns `None` for the empty tree. The snapshot does not borrow the
    /// tree, so it stays valid (and stale) across later inserts; take a new
    /// one to observe them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert(5);
    ///
    /// let root = tree.snapshot().unwrap();
    /// assert_eq!(root.key(), "5");
    /// assert_eq!(root.height(), 1);
    /// assert!(root.children().is_none());
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> Option<SnapshotNode> {
        self.root.as_deref().map(SnapshotNode::capture)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for BalancedTree<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> FromIterator<K> for BalancedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord + fmt::Debug> Extend<K> for BalancedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
