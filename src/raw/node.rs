use super::handle::NodeId;

/// One stored entry plus its position in the tree.
///
/// `left` and `right` are ownership edges; `parent` is a non-owning back-edge
/// used only for upward walks (successor, predecessor, rebalancing). `height`
/// caches the height of the subtree rooted here: a leaf is 1 and an absent
/// child counts as 0. The AVL bound keeps heights under 64 for any arena the
/// 32-bit handles can address, so a byte is plenty.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) height: u8,
}

impl<K, V> Node<K, V> {
    /// Creates a new leaf attached under `parent`.
    pub(crate) const fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
            height: 1,
        }
    }
}
