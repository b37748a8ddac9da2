//! Single rotations and the four rebalancing cases built from them.

use std::cmp::Ordering;
use std::fmt;

use super::node::Node;

/// Which of the four AVL imbalance shapes a subtree is in.
///
/// The first letter names the heavy child of the unbalanced node, the second
/// names the side of that child the new key went into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Imbalance {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
}

impl Imbalance {
    /// Classifies `node` after a key was inserted somewhere beneath it.
    ///
    /// `descent` is how the inserted key compared against the key of the
    /// child it went into, recorded on the way down. The cases are tested in
    /// the order LL, RR, LR, RL, so the key position, not the child's balance
    /// sign, decides between the single and double rotation. `None` means the
    /// key became that child itself, which never unbalances `node`.
    pub(super) fn classify<K>(node: &Node<K>, descent: Option<Ordering>) -> Option<Self> {
        let balance = node.balance_factor();
        let descent = descent?;

        if balance > 1 && descent == Ordering::Less {
            return Some(Self::LeftLeft);
        }
        if balance < -1 && descent == Ordering::Greater {
            return Some(Self::RightRight);
        }
        if balance > 1 && descent == Ordering::Greater {
            return Some(Self::LeftRight);
        }
        if balance < -1 && descent == Ordering::Less {
            return Some(Self::RightLeft);
        }
        None
    }

    /// Applies the rotation(s) for this case and returns the new subtree root.
    pub(super) fn resolve<K>(self, mut node: Box<Node<K>>) -> Box<Node<K>> {
        match self {
            Self::LeftLeft => rotate_right(node),
            Self::RightRight => rotate_left(node),
            Self::LeftRight => {
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            }
            Self::RightLeft => {
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            }
        }
    }
}

impl fmt::Display for Imbalance {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::LeftLeft => "LL",
            Self::RightRight => "RR",
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
        };
        formatter.write_str(label)
    }
}

/// Rotates the subtree rooted at `pivot` to the right.
///
/// ```text
///        y              x
///       / \            / \
///      x   T3   =>   T1   y
///     / \                / \
///   T1   T2            T2   T3
/// ```
///
/// `y` moves down and has its height recomputed before `x`. Returns `pivot`
/// unchanged if it has no left child.
pub(super) fn rotate_right<K>(mut pivot: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut new_root) = pivot.left.take() else {
        return pivot;
    };
    pivot.left = new_root.right.take();
    pivot.update_height();
    new_root.right = Some(pivot);
    new_root.update_height();
    new_root
}

/// Rotates the subtree rooted at `pivot` to the left.
///
/// Mirror image of [`rotate_right`]. Returns `pivot` unchanged if it has no
/// right child.
pub(super) fn rotate_left<K>(mut pivot: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut new_root) = pivot.right.take() else {
        return pivot;
    };
    pivot.right = new_root.left.take();
    pivot.update_height();
    new_root.left = Some(pivot);
    new_root.update_height();
    new_root
}
