use core::num::NonZero;

/// The index of a node slot in the arena.
///
/// Stored as `NonZero<u32>` (index + 1) so that `Option<NodeId>` is the same
/// size as `NodeId`; tree links are `Option<NodeId>` and the niche keeps a node
/// at four words regardless of how many links it carries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<u32>);

impl NodeId {
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index()` - `index` > `NodeId::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new((index + 1) as u32) {
            Some(raw) => Self(raw),
            // index + 1 >= 1, so this arm is unreachable.
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
