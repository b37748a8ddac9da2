//! Tree cells and their height/balance bookkeeping.

// =============================================================================
// Node Definition
// =============================================================================

/// An owned child slot. `None` is the absent subtree of height 0.
pub(super) type Link<K> = Option<Box<Node<K>>>;

/// Internal node of the AVL tree.
///
/// `height` caches the height of the subtree rooted here so that balance
/// factors can be read in O(1). It must be refreshed with
/// [`Node::update_height`] whenever a child slot is reassigned.
#[derive(Clone, Debug)]
pub(super) struct Node<K> {
    pub(super) key: K,
    pub(super) height: usize,
    pub(super) left: Link<K>,
    pub(super) right: Link<K>,
}

impl<K> Node<K> {
    /// Creates a leaf holding `key`.
    pub(super) const fn leaf(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recomputes the cached height from the (already correct) children.
    pub(super) fn update_height(&mut self) {
        self.height = 1 + height(self.left.as_deref()).max(height(self.right.as_deref()));
    }

    /// Left subtree height minus right subtree height.
    ///
    /// Positive means left-heavy, negative means right-heavy.
    #[allow(clippy::cast_possible_wrap)]
    pub(super) fn balance_factor(&self) -> isize {
        // Heights are bounded by ~1.44 * log2(n), far below isize::MAX.
        height(self.left.as_deref()) as isize - height(self.right.as_deref()) as isize
    }

    pub(super) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Height of an optional subtree; the absent subtree has height 0.
pub(super) fn height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |node| node.height)
}

/// Balance factor of an optional subtree; the absent subtree is balanced.
pub(super) fn balance_factor<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(0, Node::balance_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn with_children(key: i32, left: Link<i32>, right: Link<i32>) -> Node<i32> {
        let mut node = Node {
            key,
            height: 0,
            left,
            right,
        };
        node.update_height();
        node
    }

    #[rstest]
    fn test_leaf_has_height_one() {
        let leaf = Node::leaf(5);
        assert_eq!(leaf.height, 1);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.balance_factor(), 0);
    }

    #[rstest]
    fn test_absent_node_has_height_zero_and_is_balanced() {
        assert_eq!(height::<i32>(None), 0);
        assert_eq!(balance_factor::<i32>(None), 0);
    }

    #[rstest]
    fn test_update_height_uses_taller_child() {
        let left = with_children(1, None, Some(Box::new(Node::leaf(2))));
        let node = with_children(3, Some(Box::new(left)), Some(Box::new(Node::leaf(4))));
        assert_eq!(node.height, 3);
        assert_eq!(node.balance_factor(), 1);
        assert!(!node.is_leaf());
    }

    #[rstest]
    fn test_balance_factor_sign() {
        let left_heavy = with_children(2, Some(Box::new(Node::leaf(1))), None);
        let right_heavy = with_children(2, None, Some(Box::new(Node::leaf(3))));
        assert_eq!(balance_factor(Some(&left_heavy)), 1);
        assert_eq!(balance_factor(Some(&right_heavy)), -1);
    }

    #[rstest]
    fn test_height_reads_cache_without_recomputing() {
        let mut node = Node::leaf(1);
        node.height = 7;
        assert_eq!(height(Some(&node)), 7);
    }
}
