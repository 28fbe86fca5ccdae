use super::node_id::NodeId;

/// Which child slot of a node a link occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A binary-search-tree node.
///
/// The key is immutable after creation; the value lives in a separate arena
/// (cache-friendlier traversal, and it lets a mutable value iterator hand
/// out `&mut V` without touching the link structure). All links are arena
/// ids; `None` stands in for null.
#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) value: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    pub(crate) const fn new(key: K, value: NodeId, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
