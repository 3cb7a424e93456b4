//! The public ordered-map type and its cursors and iterators.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

use crate::compare::{Comparator, NaturalOrder};
use crate::error::{Error, Result};
use crate::raw::{NodeId, RawAvlMap};

mod cursor;

pub use cursor::Cursor;
use cursor::MapId;

/// An ordered map backed by an AVL tree.
///
/// Entries are kept sorted under the map's [`Comparator`], which defaults to
/// [`NaturalOrder`] (the key type's [`Ord`] order). Lookup, insertion, and
/// erasure are O(log n); the comparator defines *equivalence* as "neither key
/// is less than the other", so any strict weak order works, not just exact
/// equality.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the map, or for
/// the comparator to answer inconsistently across calls. The behavior of a map
/// observing such a logic error is unspecified but memory-safe.
///
/// # Examples
///
/// ```
/// use balsa_tree::AvlMap;
///
/// let mut movie_reviews: AvlMap<&str, &str> = AvlMap::new();
///
/// // review some movies.
/// movie_reviews.insert("Office Space", "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction", "Masterpiece.");
/// movie_reviews.insert("The Godfather", "Very enjoyable.");
///
/// // checked access reports absence instead of panicking.
/// assert!(movie_reviews.at(&"Les Miserables").is_err());
/// assert_eq!(movie_reviews.at(&"Pulp Fiction"), Ok(&"Masterpiece."));
///
/// // iterate over everything in key order.
/// for (movie, review) in &movie_reviews {
///     println!("{movie}: \"{review}\"");
/// }
/// ```
///
/// ## Cursors
///
/// Positions in the map are [`Cursor`] values: [`begin`](AvlMap::begin),
/// [`end`](AvlMap::end), [`find`](AvlMap::find), and
/// [`insert`](AvlMap::insert) all hand one out. A cursor stays usable across
/// unrelated mutations (nodes never move), and every cursor operation
/// validates that the cursor belongs to this map before touching the tree:
///
/// ```
/// use balsa_tree::{AvlMap, Error};
///
/// let mut map: AvlMap<i32, char> = AvlMap::new();
/// map.insert(1, 'a');
/// map.insert(2, 'b');
///
/// let mut cursor = map.begin();
/// while cursor != map.end() {
///     let (key, value) = map.key_value(cursor).unwrap();
///     println!("{key}: {value}");
///     cursor = map.next(cursor).unwrap();
/// }
///
/// // Stepping past the end is an error, not a wraparound.
/// assert_eq!(map.next(map.end()), Err(Error::InvalidCursor));
/// ```
///
/// ## Custom orderings
///
/// ```
/// use balsa_tree::{AvlMap, ReverseOrder};
///
/// let mut map: AvlMap<u32, &str, ReverseOrder> = AvlMap::new();
/// map.insert(1, "one");
/// map.insert(3, "three");
/// map.insert(2, "two");
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [3, 2, 1]);
/// ```
pub struct AvlMap<K, V, C = NaturalOrder> {
    raw: RawAvlMap<K, V, C>,
    id: MapId,
}

/// An iterator over the entries of an `AvlMap`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`AvlMap`].
///
/// # Examples
///
/// ```
/// use balsa_tree::AvlMap;
///
/// let map: AvlMap<i32, &str> = [(1, "a"), (2, "b")].into_iter().collect();
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: AvlMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, C> {
    raw: &'a RawAvlMap<K, V, C>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

/// An iterator over the keys of an `AvlMap`, in order.
///
/// This `struct` is created by the [`keys`](AvlMap::keys) method on [`AvlMap`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, C> {
    inner: Iter<'a, K, V, C>,
}

/// An iterator over the values of an `AvlMap`, in key order.
///
/// This `struct` is created by the [`values`](AvlMap::values) method on
/// [`AvlMap`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, C> {
    inner: Iter<'a, K, V, C>,
}

/// An owning iterator over the entries of an `AvlMap`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`AvlMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V, C> AvlMap<K, V, C> {
    /// Makes a new, empty `AvlMap` using the comparator's default instance.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_comparator(C::default())
    }

    /// Makes a new, empty `AvlMap` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::{AvlMap, ReverseOrder};
    ///
    /// let mut map = AvlMap::with_comparator(ReverseOrder);
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.first_key_value(), Some((&2, &"b")));
    /// ```
    #[must_use]
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            raw: RawAvlMap::new(cmp),
            id: MapId::mint(),
        }
    }

    /// Returns a reference to the map's comparator.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1) - maintained alongside every insert and erase.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut a: AvlMap<i32, &str> = AvlMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, removing all entries.
    ///
    /// This retires the map's identity: every outstanding [`Cursor`] becomes
    /// invalid, including past-the-end cursors.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut a: AvlMap<i32, &str> = AvlMap::new();
    /// a.insert(1, "a");
    /// let stale = a.begin();
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert!(a.key_value(stale).is_err());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
        self.id = MapId::mint();
    }

    /// Returns a cursor to the first (minimum-key) entry, or [`end`]'s
    /// sentinel if the map is empty.
    ///
    /// [`end`]: AvlMap::end
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.id, self.raw.min_node())
    }

    /// Returns the past-the-end cursor: the position one past the maximum
    /// entry. It references no entry and cannot be dereferenced.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.id, None)
    }

    /// Returns the first key-value pair in the map. The key in this pair is
    /// the minimum key under the map's ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(2, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let id = self.raw.min_node()?;
        let node = self.raw.node(id);
        Some((&node.key, &node.value))
    }

    /// Returns the last key-value pair in the map. The key in this pair is
    /// the maximum key under the map's ordering.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let id = self.raw.max_node()?;
        let node = self.raw.node(id);
        Some((&node.key, &node.value))
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            raw: &self.raw,
            front: self.raw.min_node(),
            back: self.raw.max_node(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in key order.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { inner: self.iter() }
    }

    /// Resolves a cursor against this map: checks ownership and (for entry
    /// positions) that the referenced node is still live.
    fn resolve(&self, cursor: Cursor) -> Result<Option<NodeId>> {
        if cursor.map() != self.id {
            return Err(Error::InvalidCursor);
        }
        if let Some(id) = cursor.node()
            && !self.raw.contains_node(id)
        {
            return Err(Error::InvalidCursor);
        }
        Ok(cursor.node())
    }

    /// Like [`resolve`](Self::resolve), but the past-the-end sentinel is also
    /// an error.
    fn resolve_entry(&self, cursor: Cursor) -> Result<NodeId> {
        self.resolve(cursor)?.ok_or(Error::InvalidCursor)
    }

    /// Returns the key-value pair the cursor references.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is past-the-end or does not
    /// belong to this map.
    pub fn key_value(&self, cursor: Cursor) -> Result<(&K, &V)> {
        let id = self.resolve_entry(cursor)?;
        let node = self.raw.node(id);
        Ok((&node.key, &node.value))
    }

    /// Returns a reference to the value the cursor references.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is past-the-end or does not
    /// belong to this map.
    pub fn value(&self, cursor: Cursor) -> Result<&V> {
        let id = self.resolve_entry(cursor)?;
        Ok(&self.raw.node(id).value)
    }

    /// Returns a mutable reference to the value the cursor references. Keys
    /// are immutable while in the map; only values can be written through a
    /// cursor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is past-the-end or does not
    /// belong to this map.
    pub fn value_mut(&mut self, cursor: Cursor) -> Result<&mut V> {
        let id = self.resolve_entry(cursor)?;
        Ok(&mut self.raw.node_mut(id).value)
    }

    /// Returns the cursor one position after `cursor` in key order. Stepping
    /// from the last entry yields [`end`](AvlMap::end).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is already past-the-end or does
    /// not belong to this map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// map.insert(1, "a");
    ///
    /// let last = map.begin();
    /// assert_eq!(map.next(last), Ok(map.end()));
    /// assert!(map.next(map.end()).is_err());
    /// ```
    pub fn next(&self, cursor: Cursor) -> Result<Cursor> {
        let id = self.resolve_entry(cursor)?;
        Ok(Cursor::new(self.id, self.raw.next_node(id)))
    }

    /// Returns the cursor one position before `cursor` in key order. Stepping
    /// back from [`end`](AvlMap::end) yields the maximum entry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor references the minimum entry, if
    /// the map is empty, or if the cursor does not belong to this map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let last = map.prev(map.end()).unwrap();
    /// assert_eq!(map.key_value(last), Ok((&2, &"b")));
    /// assert!(map.prev(map.begin()).is_err());
    /// ```
    pub fn prev(&self, cursor: Cursor) -> Result<Cursor> {
        match self.resolve(cursor)? {
            None => {
                let max = self.raw.max_node().ok_or(Error::InvalidCursor)?;
                Ok(Cursor::new(self.id, Some(max)))
            }
            Some(id) => {
                let prev = self.raw.prev_node(id).ok_or(Error::InvalidCursor)?;
                Ok(Cursor::new(self.id, Some(prev)))
            }
        }
    }

    /// Removes the entry the cursor references and returns it.
    ///
    /// The cursor (and any copy of it) is left dangling; validation happens
    /// before any mutation, so a failed erase leaves the map untouched.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is past-the-end or does not
    /// belong to this map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let cursor = map.find(&1);
    /// assert_eq!(map.erase(cursor), Ok((1, "a")));
    /// assert_eq!(map.len(), 1);
    /// assert!(map.erase(cursor).is_err()); // already gone
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<(K, V)> {
        let id = self.resolve_entry(cursor)?;
        Ok(self.raw.erase_node(id))
    }
}

impl<K, V, C: Comparator<K>> AvlMap<K, V, C> {
    /// Returns a reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no equivalent key is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::{AvlMap, Error};
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V> {
        let id = self.raw.find_node(key).ok_or(Error::KeyNotFound)?;
        Ok(&self.raw.node(id).value)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no equivalent key is present.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        let id = self.raw.find_node(key).ok_or(Error::KeyNotFound)?;
        Ok(&mut self.raw.node_mut(id).value)
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.at(key).ok()
    }

    /// Returns a mutable reference to the value for `key`, or `None` if
    /// absent.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.at_mut(key).ok()
    }

    /// Returns `true` if the map contains a key equivalent to `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.find_node(key).is_some()
    }

    /// Returns the number of entries with a key equivalent to `key`: always 0
    /// or 1, since the map never holds duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.count(&1), 1);
    /// assert_eq!(map.count(&2), 0);
    /// ```
    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Returns a cursor to the entry with a key equivalent to `key`, or the
    /// past-the-end cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.value(map.find(&1)), Ok(&"a"));
    /// assert_eq!(map.find(&2), map.end());
    /// ```
    #[must_use]
    pub fn find(&self, key: &K) -> Cursor {
        Cursor::new(self.id, self.raw.find_node(key))
    }

    /// Inserts a key-value pair unless an equivalent key is already present.
    ///
    /// Returns a cursor to the inserted entry (or to the existing entry that
    /// blocked the insertion) and `true` iff the insertion happened. A blocked
    /// insert changes nothing: the existing value is kept and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// let (_, inserted) = map.insert(37, "a");
    /// assert!(inserted);
    ///
    /// let (existing, inserted) = map.insert(37, "b");
    /// assert!(!inserted);
    /// assert_eq!(map.value(existing), Ok(&"a"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Cursor, bool) {
        let (id, inserted) = self.raw.insert(key, value);
        (Cursor::new(self.id, Some(id)), inserted)
    }

    /// Returns a mutable reference to the value for `key`, inserting
    /// `V::default()` first if the key is absent.
    ///
    /// This is the mutable indexing operation; `map[&key] = value` sugars to
    /// it via [`IndexMut`].
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<u32, String> = AvlMap::new();
    /// map.or_insert_default(10).push('x');
    /// assert_eq!(map.at(&10), Ok(&"x".to_string()));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let (id, _) = self.raw.insert(key, V::default());
        &mut self.raw.node_mut(id).value
    }

    /// Removes the entry with a key equivalent to `key`, returning its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<i32, &str> = AvlMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.raw.find_node(key)?;
        Some(self.raw.erase_node(id).1)
    }
}

impl<K, V, C: Default> Default for AvlMap<K, V, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for AvlMap<K, V, C> {
    /// Deep copy: the clone owns an independent node graph and a fresh
    /// identity, so cursors never cross between original and copy.
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            id: MapId::mint(),
        }
    }

    /// Assignment semantics: drops the previous contents before cloning and
    /// retires the identity, invalidating all of the assignee's cursors.
    fn clone_from(&mut self, source: &Self) {
        self.raw.clear();
        self.raw = source.raw.clone();
        self.id = MapId::mint();
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for AvlMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for AvlMap<K, V, C> {}

impl<K, V, C: Comparator<K>> Index<&K> for AvlMap<K, V, C> {
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map. Use [`AvlMap::at`] for a
    /// checked variant.
    fn index(&self, key: &K) -> &V {
        match self.at(key) {
            Ok(value) => value,
            Err(_) => panic!("no entry found for key"),
        }
    }
}

impl<K: Clone, V: Default, C: Comparator<K>> IndexMut<&K> for AvlMap<K, V, C> {
    /// Returns a mutable reference to the value for `key`, inserting
    /// `V::default()` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balsa_tree::AvlMap;
    ///
    /// let mut map: AvlMap<u32, String> = AvlMap::new();
    /// map[&10] = "x".to_string();
    /// assert_eq!(map.at(&10), Ok(&"x".to_string()));
    /// ```
    fn index_mut(&mut self, key: &K) -> &mut V {
        self.or_insert_default(key.clone())
    }
}

impl<K, V, C> FromIterator<(K, V)> for AvlMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for AvlMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> IntoIterator for AvlMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

// ─── Iterator impls ──────────────────────────────────────────────────────────

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let raw: &'a RawAvlMap<K, V, C> = self.raw;
        let node = raw.node(id);
        self.remaining -= 1;
        // Once the ends meet, stop rather than stepping past the back half.
        self.front = if self.remaining == 0 { None } else { raw.next_node(id) };
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let raw = self.raw;
        let node = raw.node(id);
        self.remaining -= 1;
        self.back = if self.remaining == 0 { None } else { raw.prev_node(id) };
        Some((&node.key, &node.value))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {}
impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {}
impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
