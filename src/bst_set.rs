//! An ordered set backed by an unbalanced binary search tree.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem;

use crate::bst_map;
use crate::bst_map::BstMap;

/// An ordered set based on an unbalanced binary search tree.
///
/// A thin wrapper over [`BstMap<T, ()>`], the way the std `BTreeSet` wraps
/// `BTreeMap`; it shares the map's complexity profile, including the O(n)
/// worst case on sorted insertion runs.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item changes while it is in the set.
///
/// # Examples
///
/// ```
/// use arbor_collections::BstSet;
///
/// let mut books = BstSet::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// if !books.contains(&"The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// books.remove(&"The Odyssey");
///
/// // Items iterate in sorted order.
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// [`BstMap<T, ()>`]: BstMap
#[derive(Clone)]
pub struct BstSet<T> {
    map: BstMap<T, ()>,
}

/// An iterator over the items of a `BstSet`, in sorted order.
///
/// Created by [`BstSet::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: bst_map::Keys<'a, T, ()>,
}

/// An owning iterator over the items of a `BstSet`, in sorted order.
///
/// Created by [`BstSet::into_iter`] (provided by the [`IntoIterator`]
/// trait).
pub struct IntoIter<T> {
    inner: bst_map::IntoIter<T, ()>,
}

impl<T> BstSet<T> {
    /// Makes a new, empty `BstSet`.
    ///
    /// Does not allocate anything on its own.
    #[must_use]
    pub const fn new() -> Self {
        Self { map: BstMap::new() }
    }

    /// Returns the number of items in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the maximum number of items the set could ever hold,
    /// computed from the address space and the node footprint.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.map.max_size()
    }

    /// Clears the set, removing all items.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Swaps the contents of two sets.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Gets an iterator over the items of the set, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstSet;
    ///
    /// let set = BstSet::from([3, 1, 2]);
    /// let items: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(items, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }
}

impl<T: Ord> BstSet<T> {
    /// Returns `true` if the set contains the specified item.
    ///
    /// The item may be any borrowed form of the set's item type, but the
    /// ordering on the borrowed form *must* match the ordering on the item
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstSet;
    ///
    /// let set = BstSet::from([1, 2, 3]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&4));
    /// ```
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(item)
    }

    /// Returns a reference to the stored item equal to `item`, if any.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(item).map(|(stored, _)| stored)
    }

    /// Adds an item to the set.
    ///
    /// Returns `true` if the item was freshly inserted, `false` (and the
    /// set is untouched) if an equal item was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        self.map.insert(item, ())
    }

    /// Adds several items at once, in call order.
    ///
    /// Returns one flag per item, `true` where the item was freshly
    /// inserted.
    pub fn insert_many<I>(&mut self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().map(|item| self.insert(item)).collect()
    }

    /// Removes an item from the set. Returns `true` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstSet;
    ///
    /// let mut set = BstSet::from([2]);
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// ```
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove(item).is_some()
    }

    /// Removes and returns the stored item equal to `item`, if any.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(item).map(|(stored, ())| stored)
    }

    /// Returns the minimum item.
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(item, _)| item)
    }

    /// Returns the maximum item.
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(item, _)| item)
    }

    /// Removes and returns the minimum item.
    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(item, ())| item)
    }

    /// Removes and returns the maximum item.
    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(item, ())| item)
    }

    /// Returns the first item greater than or equal to `item`.
    pub fn lower_bound<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.lower_bound(item).map(|(stored, _)| stored)
    }

    /// Returns the first item strictly greater than `item`.
    pub fn upper_bound<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.upper_bound(item).map(|(stored, _)| stored)
    }

    /// Moves into `self` every item of `other` not yet present. Items that
    /// collide stay behind in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstSet;
    ///
    /// let mut a = BstSet::from([1, 2]);
    /// let mut b = BstSet::from([2, 3]);
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(b.len(), 1);
    /// assert!(b.contains(&2));
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        self.map.merge(&mut other.map);
    }
}

impl<T> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BstSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for BstSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq> Eq for BstSet<T> {}

impl<T: Hash> Hash for BstSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Ord> FromIterator<T> for BstSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BstSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BstSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Ord> IntoIterator for BstSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self.map.into_iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(item, ())| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|(item, ())| item)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
