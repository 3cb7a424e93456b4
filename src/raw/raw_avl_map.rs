use alloc::vec::Vec;

use crate::compare::Comparator;

use super::arena::Arena;
use super::handle::NodeId;
use super::node::Node;

/// The AVL tree backing `AvlMap`.
///
/// The arena owns every node; `root` plus the per-node `left`/`right` links
/// form the ownership tree, while `parent` links are observation edges only.
/// Heights are maintained eagerly on every structural change, so the balance
/// invariant `|height(left) - height(right)| <= 1` holds between all calls.
pub(crate) struct RawAvlMap<K, V, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<NodeId>,
    /// Total number of key-value pairs in the tree.
    len: usize,
    /// The strict-weak-order comparison rule for keys.
    cmp: C,
}

impl<K, V, C> RawAvlMap<K, V, C> {
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Drops every node at once. The arena owns them all, so no tree walk is
    /// needed.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns true if `id` names a live node of this tree.
    pub(crate) fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes.get_mut(id)
    }

    // ─── Traversal ───────────────────────────────────────────────────────────

    /// Returns the minimum (leftmost) node of the whole tree.
    pub(crate) fn min_node(&self) -> Option<NodeId> {
        self.root.map(|root| self.min_in(root))
    }

    /// Returns the maximum (rightmost) node of the whole tree.
    pub(crate) fn max_node(&self) -> Option<NodeId> {
        self.root.map(|root| self.max_in(root))
    }

    /// Returns the leftmost node of the subtree rooted at `id`.
    fn min_in(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.nodes.get(current).left {
            current = left;
        }
        current
    }

    /// Returns the rightmost node of the subtree rooted at `id`.
    fn max_in(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(right) = self.nodes.get(current).right {
            current = right;
        }
        current
    }

    /// Returns the in-order successor of `id`, or `None` if `id` is the
    /// maximum.
    ///
    /// With a right subtree the successor is its minimum; otherwise walk up
    /// the parent links until the step up arrives from a left child.
    pub(crate) fn next_node(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.nodes.get(id).right {
            return Some(self.min_in(right));
        }
        let mut current = id;
        let mut parent = self.nodes.get(current).parent;
        while let Some(p) = parent {
            if self.nodes.get(p).right != Some(current) {
                break;
            }
            current = p;
            parent = self.nodes.get(p).parent;
        }
        parent
    }

    /// Returns the in-order predecessor of `id`, or `None` if `id` is the
    /// minimum. Exact mirror of [`next_node`](Self::next_node).
    pub(crate) fn prev_node(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.nodes.get(id).left {
            return Some(self.max_in(left));
        }
        let mut current = id;
        let mut parent = self.nodes.get(current).parent;
        while let Some(p) = parent {
            if self.nodes.get(p).left != Some(current) {
                break;
            }
            current = p;
            parent = self.nodes.get(p).parent;
        }
        parent
    }

    // ─── Heights and rotations ───────────────────────────────────────────────

    fn height_of(&self, id: Option<NodeId>) -> u8 {
        id.map_or(0, |id| self.nodes.get(id).height)
    }

    /// Recomputes the cached height of `id` from its children.
    fn update_height(&mut self, id: NodeId) {
        let node = self.nodes.get(id);
        let height = self.height_of(node.left).max(self.height_of(node.right)) + 1;
        self.nodes.get_mut(id).height = height;
    }

    /// Balance factor: height(right) - height(left).
    fn balance(&self, id: NodeId) -> i16 {
        let node = self.nodes.get(id);
        i16::from(self.height_of(node.right)) - i16::from(self.height_of(node.left))
    }

    /// Rotates the subtree at `x` to the left; `x`'s right child takes its
    /// place. Relinks the inner grandchild and the grandparent, updates the
    /// root if `x` was the root, and recomputes both touched heights.
    fn rotate_left(&mut self, x: NodeId) {
        let Some(y) = self.nodes.get(x).right else {
            return;
        };
        let inner = self.nodes.get(y).left;
        let parent = self.nodes.get(x).parent;

        self.nodes.get_mut(y).left = Some(x);
        self.nodes.get_mut(x).right = inner;
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(x);
        }
        self.nodes.get_mut(y).parent = parent;
        self.nodes.get_mut(x).parent = Some(y);
        match parent {
            None => self.root = Some(y),
            Some(p) => {
                let p_node = self.nodes.get_mut(p);
                if p_node.left == Some(x) {
                    p_node.left = Some(y);
                } else {
                    p_node.right = Some(y);
                }
            }
        }

        self.update_height(x);
        self.update_height(y);
    }

    /// Mirror of [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, y: NodeId) {
        let Some(x) = self.nodes.get(y).left else {
            return;
        };
        let inner = self.nodes.get(x).right;
        let parent = self.nodes.get(y).parent;

        self.nodes.get_mut(x).right = Some(y);
        self.nodes.get_mut(y).left = inner;
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(y);
        }
        self.nodes.get_mut(x).parent = parent;
        self.nodes.get_mut(y).parent = Some(x);
        match parent {
            None => self.root = Some(x),
            Some(p) => {
                let p_node = self.nodes.get_mut(p);
                if p_node.left == Some(y) {
                    p_node.left = Some(x);
                } else {
                    p_node.right = Some(x);
                }
            }
        }

        self.update_height(y);
        self.update_height(x);
    }

    /// Restores the balance invariant at a single node: recomputes its height
    /// and applies a single or double rotation if a side is two levels deep.
    fn rebalance_at(&mut self, id: NodeId) {
        self.update_height(id);
        let factor = self.balance(id);
        if factor > 1 {
            // Right-heavy; a left-leaning right child needs the double form.
            if let Some(right) = self.nodes.get(id).right
                && self.balance(right) < 0
            {
                self.rotate_right(right);
            }
            self.rotate_left(id);
        } else if factor < -1 {
            if let Some(left) = self.nodes.get(id).left
                && self.balance(left) > 0
            {
                self.rotate_left(left);
            }
            self.rotate_right(id);
        }
    }

    /// Rebalances every node from `start` up to the root.
    ///
    /// One rotation can change the height of everything above it, so the walk
    /// always continues to the root rather than stopping at the first node
    /// whose height settles.
    fn rebalance_up(&mut self, start: Option<NodeId>) {
        let mut current = start;
        while let Some(id) = current {
            self.rebalance_at(id);
            // A rotation at `id` demotes it under the rotated-up child; the
            // parent link always points at the next node still to fix.
            current = self.nodes.get(id).parent;
        }
    }

    // ─── Search and mutation ─────────────────────────────────────────────────

    /// Returns the node holding a key equivalent to `key`, if any.
    pub(crate) fn find_node(&self, key: &K) -> Option<NodeId>
    where
        C: Comparator<K>,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            if self.cmp.equiv(key, &node.key) {
                return Some(id);
            }
            current = if self.cmp.less(key, &node.key) { node.left } else { node.right };
        }
        None
    }

    /// Inserts `key`/`value` unless an equivalent key is present.
    ///
    /// Returns the node holding the key and whether an insertion happened; an
    /// equivalent existing key blocks the insert and the tree is untouched.
    pub(crate) fn insert(&mut self, key: K, value: V) -> (NodeId, bool)
    where
        C: Comparator<K>,
    {
        let mut current = self.root;
        let mut parent = None;
        let mut went_left = false;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            if self.cmp.equiv(&key, &node.key) {
                return (id, false);
            }
            parent = Some(id);
            if self.cmp.less(&key, &node.key) {
                current = node.left;
                went_left = true;
            } else {
                current = node.right;
                went_left = false;
            }
        }

        let id = self.nodes.alloc(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(id),
            Some(p) => {
                let p_node = self.nodes.get_mut(p);
                if went_left {
                    p_node.left = Some(id);
                } else {
                    p_node.right = Some(id);
                }
            }
        }
        self.len += 1;
        self.rebalance_up(parent);
        (id, true)
    }

    /// Replaces the subtree rooted at `u` with the one rooted at `v` in `u`'s
    /// parent (or at the root), reparenting `v`. `u`'s own links are left for
    /// the caller to reuse or discard.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.nodes.get(u).parent;
        match parent {
            None => self.root = v,
            Some(p) => {
                let p_node = self.nodes.get_mut(p);
                if p_node.left == Some(u) {
                    p_node.left = v;
                } else {
                    p_node.right = v;
                }
            }
        }
        if let Some(v) = v {
            self.nodes.get_mut(v).parent = parent;
        }
    }

    /// Removes the already-located node `z` and returns its entry.
    ///
    /// With two children the in-order successor `s` (leftmost of the right
    /// subtree, so at most a right child) is spliced into `z`'s place. Height
    /// damage can then sit at two disjoint spots, so both the detachment point
    /// and `z`'s former parent get their own walk to the root.
    pub(crate) fn erase_node(&mut self, z: NodeId) -> (K, V) {
        let (z_left, z_right) = {
            let node = self.nodes.get(z);
            (node.left, node.right)
        };

        if z_left.is_none() || z_right.is_none() {
            let child = z_left.or(z_right);
            let parent = self.nodes.get(z).parent;
            self.transplant(z, child);
            let node = self.nodes.take(z);
            self.len -= 1;
            self.rebalance_up(parent);
            (node.key, node.value)
        } else {
            let successor = {
                let Some(right) = z_right else { unreachable!() };
                self.min_in(right)
            };
            let rebalance_start;
            if self.nodes.get(successor).parent == Some(z) {
                // Successor is z's direct right child and replaces it in place.
                rebalance_start = Some(successor);
            } else {
                rebalance_start = self.nodes.get(successor).parent;
                let s_right = self.nodes.get(successor).right;
                self.transplant(successor, s_right);
                let grafted = self.nodes.get(z).right;
                self.nodes.get_mut(successor).right = grafted;
                if let Some(grafted) = grafted {
                    self.nodes.get_mut(grafted).parent = Some(successor);
                }
            }

            let parent = self.nodes.get(z).parent;
            self.transplant(z, Some(successor));
            let left = self.nodes.get(z).left;
            self.nodes.get_mut(successor).left = left;
            if let Some(left) = left {
                self.nodes.get_mut(left).parent = Some(successor);
            }

            let node = self.nodes.take(z);
            self.len -= 1;
            self.rebalance_up(rebalance_start);
            self.rebalance_up(parent);
            (node.key, node.value)
        }
    }

    /// Empties the tree into a sorted vector of entries.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len);
        let mut current = self.min_node();
        while let Some(id) = current {
            order.push(id);
            current = self.next_node(id);
        }

        let mut entries = Vec::with_capacity(order.len());
        for id in order {
            let node = self.nodes.take(id);
            entries.push((node.key, node.value));
        }
        self.root = None;
        self.len = 0;
        self.nodes.clear();
        entries
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for RawAvlMap<K, V, C> {
    /// Pre-order deep copy into a fresh arena; the clone shares no nodes with
    /// the source. Recursion depth is the tree height, which the balance
    /// invariant bounds at O(log n).
    fn clone(&self) -> Self {
        fn clone_subtree<K: Clone, V: Clone>(
            source: &Arena<Node<K, V>>,
            target: &mut Arena<Node<K, V>>,
            id: NodeId,
            parent: Option<NodeId>,
        ) -> NodeId {
            let node = source.get(id);
            let new_id = target.alloc(Node::new(node.key.clone(), node.value.clone(), parent));
            let left = node.left.map(|left| clone_subtree(source, target, left, Some(new_id)));
            let right = node.right.map(|right| clone_subtree(source, target, right, Some(new_id)));
            let new_node = target.get_mut(new_id);
            new_node.left = left;
            new_node.right = right;
            new_node.height = node.height;
            new_id
        }

        let mut nodes = Arena::with_capacity(self.len);
        let root = self.root.map(|root| clone_subtree(&self.nodes, &mut nodes, root, None));
        Self {
            nodes,
            root,
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}
