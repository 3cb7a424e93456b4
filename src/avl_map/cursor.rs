use core::num::NonZero;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::raw::NodeId;

/// The identity of one live [`AvlMap`](crate::AvlMap) instance.
///
/// Drawn from a process-wide counter so no two maps (or two incarnations of
/// the same map, before and after `clear`/`clone_from`) ever share an
/// identity. Cursors carry the identity they were minted under, which is how
/// the map recognizes foreign or retired cursors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct MapId(NonZero<u64>);

impl MapId {
    pub(crate) fn mint() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        let raw = NEXT.fetch_add(1, Ordering::Relaxed);
        match NonZero::new(raw) {
            Some(raw) => Self(raw),
            // The counter starts at 1 and a u64 cannot realistically wrap.
            None => panic!("`MapId::mint()` - identity counter wrapped!"),
        }
    }
}

/// A position in an [`AvlMap`](crate::AvlMap): either one entry or the
/// past-the-end sentinel.
///
/// A cursor is a plain `Copy` value holding a node reference and the identity
/// of the map that minted it; it owns nothing and never outlives usefulness
/// silently. All access goes back through the owning map
/// ([`key_value`](crate::AvlMap::key_value), [`next`](crate::AvlMap::next),
/// [`erase`](crate::AvlMap::erase), ...), and every such call first checks
/// that the cursor belongs to that map, failing with
/// [`Error::InvalidCursor`](crate::Error::InvalidCursor) otherwise.
///
/// Two cursors are equal iff they were minted by the same map incarnation and
/// sit at the same position, the past-the-end sentinel included. Erasing the
/// entry a cursor points at leaves the cursor dangling: the map detects this
/// while the entry's slot stays vacant, but once the slot is reused the
/// cursor's behavior is unspecified (a documented logic error, never memory
/// unsafety).
///
/// # Example
///
/// ```
/// use balsa_tree::AvlMap;
///
/// let mut map: AvlMap<i32, &str> = AvlMap::new();
/// map.insert(1, "one");
///
/// let found = map.find(&1);
/// assert_eq!(found, map.begin());
/// assert_ne!(found, map.end());
///
/// // Cursors from another map never compare equal, even at the sentinel.
/// let other: AvlMap<i32, &str> = AvlMap::new();
/// assert_ne!(map.end(), other.end());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cursor {
    map: MapId,
    node: Option<NodeId>,
}

impl Cursor {
    pub(crate) const fn new(map: MapId, node: Option<NodeId>) -> Self {
        Self { map, node }
    }

    pub(crate) const fn map(self) -> MapId {
        self.map
    }

    pub(crate) const fn node(self) -> Option<NodeId> {
        self.node
    }
}
