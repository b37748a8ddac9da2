//! Read-only projection of the tree shape.
//!
//! A [`SnapshotNode`] is what external consumers (renderers, inspectors,
//! tests) see instead of the live tree. It is detached from the tree: taking
//! one borrows the tree only for the duration of the call, and later inserts
//! do not affect snapshots already taken.

use std::fmt;

use super::node::Node;

/// One node of a tree snapshot.
///
/// `children` lists the present children in order, left before right. It is
/// `None` (not an empty list) for a leaf, which is also how it serializes:
/// the field is omitted from the JSON form.
///
/// With the `serde` feature the JSON shape is
///
/// ```text
/// { "name": "20", "balance": 0, "height": 2, "children": [ ... ] }
/// ```
///
/// # Examples
///
/// ```rust
/// use balanced_tree::BalancedTree;
///
/// let tree: BalancedTree<i32> = [20, 10, 30].into_iter().collect();
/// let root = tree.snapshot().unwrap();
///
/// assert_eq!(root.key(), "20");
/// assert_eq!(root.height(), 2);
/// assert_eq!(root.balance(), 0);
///
/// let children: Vec<&str> = root
///     .children()
///     .unwrap_or_default()
///     .iter()
///     .map(|child| child.key())
///     .collect();
/// assert_eq!(children, vec!["10", "30"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotNode {
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    key: String,
    balance: isize,
    height: usize,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "deserialize_children"
        )
    )]
    children: Option<Vec<SnapshotNode>>,
}

static_assertions::assert_impl_all!(SnapshotNode: Send, Sync, Clone);

/// Reads a children list, treating an empty list like an absent one so a
/// deserialized leaf always has `children == None`.
#[cfg(feature = "serde")]
fn deserialize_children<'de, D>(deserializer: D) -> Result<Option<Vec<SnapshotNode>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let children = Option::<Vec<SnapshotNode>>::deserialize(deserializer)?;
    Ok(children.filter(|children| !children.is_empty()))
}

impl SnapshotNode {
    /// Projects the subtree rooted at `node`.
    pub(super) fn capture<K: fmt::Display>(node: &Node<K>) -> Self {
        let children = if node.is_leaf() {
            None
        } else {
            Some(
                [node.left.as_deref(), node.right.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(Self::capture)
                    .collect(),
            )
        };

        Self {
            key: node.key.to_string(),
            balance: node.balance_factor(),
            height: node.height,
            children,
        }
    }

    /// The node's key, rendered with its `Display` implementation.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Balance factor at capture time: left height minus right height.
    #[inline]
    #[must_use]
    pub const fn balance(&self) -> isize {
        self.balance
    }

    /// Height of the subtree at capture time (a leaf has height 1).
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Present children, left first. `None` for a leaf.
    #[inline]
    #[must_use]
    pub fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_leaf_has_no_children_field() {
        let snapshot = SnapshotNode::capture(&Node::leaf(42));
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"name":"42","balance":0,"height":1}"#);
    }

    #[rstest]
    fn test_serialize_inner_node() {
        let mut node = Node::leaf(2);
        node.left = Some(Box::new(Node::leaf(1)));
        node.update_height();

        let json = serde_json::to_string(&SnapshotNode::capture(&node)).unwrap();
        assert_eq!(
            json,
            r#"{"name":"2","balance":1,"height":2,"children":[{"name":"1","balance":0,"height":1}]}"#
        );
    }

    #[rstest]
    fn test_deserialize_missing_children_as_leaf() {
        let json = r#"{"name":"7","balance":0,"height":1}"#;
        let snapshot: SnapshotNode = serde_json::from_str(json).unwrap();
        assert!(snapshot.is_leaf());
        assert_eq!(snapshot, SnapshotNode::capture(&Node::leaf(7)));
    }

    #[rstest]
    #[case::empty_list(r#"{"name":"7","balance":0,"height":1,"children":[]}"#)]
    #[case::null(r#"{"name":"7","balance":0,"height":1,"children":null}"#)]
    fn test_deserialize_empty_children_as_leaf(#[case] json: &str) {
        let snapshot: SnapshotNode = serde_json::from_str(json).unwrap();
        assert!(snapshot.is_leaf());
        assert!(snapshot.children().is_none());
        assert_eq!(snapshot, SnapshotNode::capture(&Node::leaf(7)));
        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"name":"7","balance":0,"height":1}"#
        );
    }
}
