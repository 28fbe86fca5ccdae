//! An ordered map backed by an unbalanced binary search tree.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::ops::Index;

use crate::error::{Error, Result};
use crate::raw::{NodeId, RawBstTree};

/// An ordered map based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], the map stores its entries in key
/// order; iterators produce their items sorted by key. Keys must implement
/// [`Ord`].
///
/// Unlike a red-black or AVL tree there is **no balancing invariant**:
/// lookups, insertions and removals are O(log n) on random workloads but
/// degrade to O(n) when keys arrive in sorted order. Removal uses
/// splice-and-reinsert (the erased node's subtrees are reattached wholesale
/// by ordinary descent), which keeps the order invariant but makes no
/// promise about the resulting tree shape.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the map.
///
/// # Examples
///
/// ```
/// use arbor_collections::BstMap;
///
/// let mut reviews = BstMap::new();
///
/// reviews.insert("Office Space", "Deals with real issues in the workplace.");
/// reviews.insert("Pulp Fiction", "Masterpiece.");
/// reviews.insert("The Godfather", "Very enjoyable.");
///
/// if !reviews.contains_key(&"Les Miserables") {
///     println!("We've got {} reviews, but Les Miserables ain't one.", reviews.len());
/// }
///
/// // Entries iterate in key order.
/// for (movie, review) in &reviews {
///     println!("{movie}: {review}");
/// }
/// ```
///
/// A `BstMap` with a known list of entries can be initialized from an array:
///
/// ```
/// use arbor_collections::BstMap;
///
/// let solar_distance = BstMap::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
/// ]);
/// assert_eq!(solar_distance.len(), 3);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
#[derive(Clone)]
pub struct BstMap<K, V> {
    raw: RawBstTree<K, V>,
}

/// An iterator over the entries of a `BstMap`, sorted by key.
///
/// Created by [`BstMap::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawBstTree<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

/// A mutable iterator over the entries of a `BstMap`, sorted by key.
///
/// Created by [`BstMap::iter_mut`]. Keys stay immutable; only values can be
/// changed.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    tree: *mut RawBstTree<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
    _marker: PhantomData<&'a mut (K, V)>,
}

// SAFETY: IterMut behaves as &mut RawBstTree<K, V>, so it is Send when K and
// V are Send. It is NOT Sync because mutable iterators should not be shared
// across threads.
unsafe impl<K: Send, V: Send> Send for IterMut<'_, K, V> {}

/// An owning iterator over the entries of a `BstMap`, sorted by key.
///
/// Created by [`BstMap::into_iter`] (provided by the [`IntoIterator`]
/// trait).
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `BstMap`, in sorted order.
///
/// Created by [`BstMap::keys`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `BstMap`, in key order.
///
/// Created by [`BstMap::values`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A mutable iterator over the values of a `BstMap`, in key order.
///
/// Created by [`BstMap::values_mut`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

/// An iterator over the run of entries matching one key.
///
/// Created by [`BstMap::equal_range`]; on a map (unique keys) the run holds
/// at most one entry, the type is shared with the multiset where runs can
/// be longer.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct EqualRange<'a, K, V> {
    tree: &'a RawBstTree<K, V>,
    front: Option<NodeId>,
    /// First node past the run (`None` means the run extends to the end).
    stop: Option<NodeId>,
}

impl<K, V> BstMap<K, V> {
    /// Makes a new, empty `BstMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: RawBstTree::new() }
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the maximum number of entries the map could ever hold,
    /// computed from the address space and the node footprint.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        RawBstTree::<K, V>::max_size()
    }

    /// Clears the map, removing all entries.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Swaps the contents of two maps.
    ///
    /// Plain ownership exchange; nothing is copied or reallocated.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let map = BstMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let first = map.iter().next();
    /// assert_eq!(first, Some((&1, &"a")));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::over(&self.raw)
    }

    /// Gets a mutable iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut map = BstMap::from([("a", 1), ("b", 2)]);
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(map.get(&"a"), Some(&10));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            front: self.raw.first_id(),
            back: self.raw.last_id(),
            remaining: self.raw.len(),
            tree: &mut self.raw,
            _marker: PhantomData,
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of the map, in key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { inner: self.iter_mut() }
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let id = self.raw.search(key)?;
        Some(self.raw.value(id))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let id = self.raw.search(key)?;
        Some(self.raw.value_mut(id))
    }

    /// Returns the key-value pair corresponding to the supplied key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let id = self.raw.search(key)?;
        Some(self.raw.entry(id))
    }

    /// Returns `true` if the map contains the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(key)
    }

    /// Checked keyed access: a reference to the value for `key`, or
    /// [`Error::KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::{BstMap, Error};
    ///
    /// let map = BstMap::from([("a", 1)]);
    /// assert_eq!(map.at(&"a"), Ok(&1));
    /// assert_eq!(map.at(&"b"), Err(Error::KeyNotFound));
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Checked keyed access to a mutable value reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`, inserting the
    /// default value first if the key is absent (the `operator[]` of the
    /// classic map interface).
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut counts: BstMap<&str, u32> = BstMap::new();
    /// *counts.get_or_default("apples") += 1;
    /// *counts.get_or_default("apples") += 1;
    /// assert_eq!(counts.get(&"apples"), Some(&2));
    /// ```
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let (id, _) = self.raw.insert_unique(key, V::default());
        self.raw.value_mut(id)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present this is a **no-op**: the existing
    /// value is kept, the incoming one is dropped, and `false` is returned.
    /// Use [`insert_or_assign`](Self::insert_or_assign) to overwrite.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map.get(&37), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.raw.insert_unique(key, value).1
    }

    /// Inserts a key-value pair, overwriting the value in place if the key
    /// is already present. Returns the previous value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert_or_assign(37, "a"), None);
    /// assert_eq!(map.insert_or_assign(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert_or_assign(key, value).1
    }

    /// Inserts several key-value pairs at once, in call order.
    ///
    /// Returns one flag per pair, `true` where the pair was freshly
    /// inserted and `false` where its key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// let results = map.insert_many([(1, "a"), (2, "b"), (1, "dup")]);
    /// assert_eq!(results, [true, true, false]);
    /// ```
    pub fn insert_many<I>(&mut self, entries: I) -> Vec<bool>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().map(|(key, value)| self.insert(key, value)).collect()
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut map = BstMap::from([(1, "a")]);
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key-value pair.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Returns the entry with the minimum key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_id().map(|id| self.raw.entry(id))
    }

    /// Returns the entry with the maximum key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_id().map(|id| self.raw.entry(id))
    }

    /// Removes and returns the entry with the minimum key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the entry with the maximum key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Returns the first entry whose key is greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let map = BstMap::from([(10, "a"), (20, "b")]);
    /// assert_eq!(map.lower_bound(&15), Some((&20, &"b")));
    /// assert_eq!(map.lower_bound(&20), Some((&20, &"b")));
    /// assert_eq!(map.lower_bound(&25), None);
    /// ```
    pub fn lower_bound<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.lower_bound(key).map(|id| self.raw.entry(id))
    }

    /// Returns the first entry whose key is strictly greater than `key`.
    pub fn upper_bound<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.upper_bound(key).map(|id| self.raw.entry(id))
    }

    /// Returns an iterator over the run of entries matching `key`: the
    /// half-open span between [`lower_bound`](Self::lower_bound) and
    /// [`upper_bound`](Self::upper_bound). On a map the run holds at most
    /// one entry.
    pub fn equal_range<Q>(&self, key: &Q) -> EqualRange<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        EqualRange::between(&self.raw, self.raw.lower_bound(key), self.raw.upper_bound(key))
    }

    /// Moves into `self` every entry of `other` whose key is not yet
    /// present. Moved entries are erased from `other` as the walk advances;
    /// entries whose key collides stay behind in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMap;
    ///
    /// let mut a = BstMap::from([(1, "a"), (2, "a")]);
    /// let mut b = BstMap::from([(2, "b"), (3, "b")]);
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(a.get(&2), Some(&"a"));
    /// assert_eq!(b.len(), 1);
    /// assert_eq!(b.get(&2), Some(&"b"));
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        // Advance-then-erase: popping the source front never invalidates
        // the rest of the walk.
        let mut leftover = Self::new();
        while let Some((key, value)) = other.pop_first() {
            if self.contains_key(&key) {
                leftover.insert(key, value);
            } else {
                self.insert(key, value);
            }
        }
        mem::swap(other, &mut leftover);
    }
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BstMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BstMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for BstMap<K, V> {}

impl<K: Hash, V: Hash> Hash for BstMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for entry in self.iter() {
            entry.hash(state);
        }
    }
}

impl<K, Q, V> Index<&Q> for BstMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `BstMap`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BstMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for BstMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        // Later pairs win, matching the std collection conventions.
        for (key, value) in iter {
            self.insert_or_assign(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for BstMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a BstMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut BstMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K: Ord, V> IntoIterator for BstMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Full-tree iterator; shared with the multiset adapter.
    pub(crate) fn over(tree: &'a RawBstTree<K, V>) -> Self {
        Self {
            tree,
            front: tree.first_id(),
            back: tree.last_id(),
            remaining: tree.len(),
        }
    }
}

impl<'a, K, V> EqualRange<'a, K, V> {
    pub(crate) fn between(
        tree: &'a RawBstTree<K, V>,
        front: Option<NodeId>,
        stop: Option<NodeId>,
    ) -> Self {
        Self { tree, front, stop }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(id);
        Some(self.tree.entry(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(id);
        Some(self.tree.entry(id))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        // SAFETY: The iterator holds the map's unique borrow, each node is
        // visited exactly once, and successor_ptr only reads link fields
        // that no handed-out reference can alias.
        self.front = unsafe { RawBstTree::successor_ptr(self.tree, id) };
        Some(unsafe { RawBstTree::entry_ptr(self.tree, id) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        // SAFETY: Same contract as `next`.
        self.back = unsafe { RawBstTree::predecessor_ptr(self.tree, id) };
        Some(unsafe { RawBstTree::entry_ptr(self.tree, id) })
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<'a, K, V> Iterator for EqualRange<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let id = self.front?;
        if Some(id) == self.stop {
            self.front = None;
            return None;
        }
        self.front = self.tree.successor(id);
        Some(self.tree.entry(id))
    }
}

impl<K, V> FusedIterator for EqualRange<'_, K, V> {}
