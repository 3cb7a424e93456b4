/// A strict weak order over keys of type `K`.
///
/// The map never asks for equality directly: two keys are *equivalent* when
/// neither is [`less`](Comparator::less) than the other, which lets key types
/// collide on a subset of their state (an id field, a case-folded string, ...).
///
/// Implementations must be consistent and side-effect-free across calls; the
/// tree's ordering invariant is only as good as the comparator backing it.
///
/// # Example
///
/// ```
/// use balsa_tree::{AvlMap, Comparator};
///
/// /// Orders strings by length only.
/// #[derive(Clone, Copy, Default)]
/// struct ByLen;
///
/// impl Comparator<&str> for ByLen {
///     fn less(&self, a: &&str, b: &&str) -> bool {
///         a.len() < b.len()
///     }
/// }
///
/// let mut map: AvlMap<&str, u32, ByLen> = AvlMap::new();
/// map.insert("ox", 1);
/// let (_, inserted) = map.insert("ax", 2); // same length: equivalent key
/// assert!(!inserted);
/// assert_eq!(map.len(), 1);
/// ```
pub trait Comparator<K> {
    /// Returns true if `a` orders strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Returns true if `a` and `b` are equivalent under this order.
    fn equiv(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The natural ascending order of a key type, as defined by its [`Ord`] impl.
///
/// This is the default comparator of [`AvlMap`](crate::AvlMap).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// The reverse of the natural order: keys iterate from largest to smallest.
///
/// # Example
///
/// ```
/// use balsa_tree::{AvlMap, ReverseOrder};
///
/// let map: AvlMap<i32, (), ReverseOrder> = [(1, ()), (3, ()), (2, ())].into_iter().collect();
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReverseOrder;

impl<K: Ord> Comparator<K> for ReverseOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}
