//! An ordered multiset backed by an unbalanced binary search tree.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem;

use crate::bst_map;
use crate::raw::RawBstTree;

/// An ordered multiset based on an unbalanced binary search tree.
///
/// Unlike [`BstSet`], equal items may appear more than once; an inserted
/// duplicate descends to the **right** of its equals, so a run of equal
/// items sits adjacent in iteration order and preserves insertion order
/// within the run.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item changes while it is in the multiset.
///
/// # Examples
///
/// ```
/// use arbor_collections::BstMultiset;
///
/// let mut bag = BstMultiset::new();
/// bag.insert(5);
/// bag.insert(3);
/// bag.insert(5);
///
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.count(&5), 2);
///
/// let items: Vec<_> = bag.iter().copied().collect();
/// assert_eq!(items, [3, 5, 5]);
/// ```
///
/// [`BstSet`]: crate::BstSet
#[derive(Clone)]
pub struct BstMultiset<T> {
    raw: RawBstTree<T, ()>,
}

/// An iterator over the items of a `BstMultiset`, in sorted order.
///
/// Created by [`BstMultiset::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: bst_map::Iter<'a, T, ()>,
}

/// An owning iterator over the items of a `BstMultiset`, in sorted order.
///
/// Created by [`BstMultiset::into_iter`] (provided by the [`IntoIterator`]
/// trait).
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<(T, ())>,
}

/// An iterator over the run of items equal to one query item.
///
/// Created by [`BstMultiset::equal_range`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct EqualRange<'a, T> {
    inner: bst_map::EqualRange<'a, T, ()>,
}

impl<T> BstMultiset<T> {
    /// Makes a new, empty `BstMultiset`.
    ///
    /// Does not allocate anything on its own.
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: RawBstTree::new() }
    }

    /// Returns the number of items in the multiset, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the multiset contains no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the maximum number of items the multiset could ever hold,
    /// computed from the address space and the node footprint.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        RawBstTree::<T, ()>::max_size()
    }

    /// Clears the multiset, removing all items.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Swaps the contents of two multisets.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Gets an iterator over the items of the multiset, in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: bst_map::Iter::over(&self.raw) }
    }
}

impl<T: Ord> BstMultiset<T> {
    /// Returns `true` if the multiset contains an item equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(item)
    }

    /// Returns the number of stored items equal to `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMultiset;
    ///
    /// let bag = BstMultiset::from([1, 2, 2, 2, 3]);
    /// assert_eq!(bag.count(&2), 3);
    /// assert_eq!(bag.count(&4), 0);
    /// ```
    pub fn count<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.equal_range(item).count()
    }

    /// Adds an item to the multiset. Insertion always succeeds; the new
    /// item lands at the right edge of its run of equals.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMultiset;
    ///
    /// let mut bag = BstMultiset::new();
    /// bag.insert(2);
    /// bag.insert(2);
    /// assert_eq!(bag.len(), 2);
    /// ```
    pub fn insert(&mut self, item: T) {
        self.raw.insert_dup(item, ());
    }

    /// Adds several items at once, in call order.
    pub fn insert_many<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Removes one occurrence of `item`. Returns `true` if one was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMultiset;
    ///
    /// let mut bag = BstMultiset::from([2, 2]);
    /// assert!(bag.remove_one(&2));
    /// assert_eq!(bag.count(&2), 1);
    /// ```
    pub fn remove_one<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(item).is_some()
    }

    /// Removes every occurrence of `item`, returning how many were removed.
    pub fn remove_all<Q>(&mut self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut removed = 0;
        while self.raw.remove(item).is_some() {
            removed += 1;
        }
        removed
    }

    /// Returns the minimum item.
    pub fn first(&self) -> Option<&T> {
        self.raw.first_id().map(|id| self.raw.key(id))
    }

    /// Returns the maximum item.
    pub fn last(&self) -> Option<&T> {
        self.raw.last_id().map(|id| self.raw.key(id))
    }

    /// Removes and returns the minimum item.
    pub fn pop_first(&mut self) -> Option<T> {
        self.raw.pop_first().map(|(item, ())| item)
    }

    /// Removes and returns the maximum item.
    pub fn pop_last(&mut self) -> Option<T> {
        self.raw.pop_last().map(|(item, ())| item)
    }

    /// Returns the first item greater than or equal to `item`.
    pub fn lower_bound<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.lower_bound(item).map(|id| self.raw.key(id))
    }

    /// Returns the first item strictly greater than `item`.
    pub fn upper_bound<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.upper_bound(item).map(|id| self.raw.key(id))
    }

    /// Returns an iterator over the run of items equal to `item`: the
    /// half-open span between [`lower_bound`](Self::lower_bound) and
    /// [`upper_bound`](Self::upper_bound).
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMultiset;
    ///
    /// let bag = BstMultiset::from([1, 2, 2, 3]);
    /// assert_eq!(bag.equal_range(&2).count(), 2);
    /// ```
    pub fn equal_range<Q>(&self, item: &Q) -> EqualRange<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        EqualRange {
            inner: bst_map::EqualRange::between(
                &self.raw,
                self.raw.lower_bound(item),
                self.raw.upper_bound(item),
            ),
        }
    }

    /// Moves every item of `other` into `self`, duplicates and all,
    /// leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_collections::BstMultiset;
    ///
    /// let mut a = BstMultiset::from([1, 2]);
    /// let mut b = BstMultiset::from([2, 3]);
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.len(), 4);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        while let Some(item) = other.pop_first() {
            self.insert(item);
        }
    }
}

impl<T> Default for BstMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BstMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for BstMultiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for BstMultiset<T> {}

impl<T: Hash> Hash for BstMultiset<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Ord> FromIterator<T> for BstMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T: Ord> Extend<T> for BstMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BstMultiset<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a BstMultiset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Ord> IntoIterator for BstMultiset<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(item, _)| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(item, _)| item)
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

impl<'a, T> Iterator for EqualRange<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(item, _)| item)
    }
}

impl<T> FusedIterator for EqualRange<'_, T> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_kept_and_adjacent() {
        let mut bag = BstMultiset::new();
        bag.insert_many([5, 1, 5, 3, 5]);
        bag.raw.validate_invariants(true);

        assert_eq!(bag.len(), 5);
        assert_eq!(bag.count(&5), 3);
        let items: Vec<_> = bag.iter().copied().collect();
        assert_eq!(items, [1, 3, 5, 5, 5]);
    }

    #[test]
    fn remove_one_takes_a_single_occurrence() {
        let mut bag = BstMultiset::from([2, 2, 2]);
        assert!(bag.remove_one(&2));
        bag.raw.validate_invariants(true);
        assert_eq!(bag.count(&2), 2);
        assert!(!bag.remove_one(&9));
    }

    #[test]
    fn remove_all_empties_the_run() {
        let mut bag = BstMultiset::from([1, 2, 2, 2, 3]);
        assert_eq!(bag.remove_all(&2), 3);
        bag.raw.validate_invariants(true);
        assert_eq!(bag.remove_all(&2), 0);
        let items: Vec<_> = bag.iter().copied().collect();
        assert_eq!(items, [1, 3]);
    }

    #[test]
    fn equal_range_spans_the_run_only() {
        let bag = BstMultiset::from([1, 2, 2, 3, 3, 3]);
        let twos: Vec<_> = bag.equal_range(&2).copied().collect();
        assert_eq!(twos, [2, 2]);
        assert_eq!(bag.equal_range(&0).count(), 0);
        assert_eq!(bag.equal_range(&3).count(), 3);
    }

    #[test]
    fn merge_drains_the_source_completely() {
        let mut a = BstMultiset::from([1, 2]);
        let mut b = BstMultiset::from([2, 2, 3]);
        a.merge(&mut b);
        a.raw.validate_invariants(true);

        assert!(b.is_empty());
        let items: Vec<_> = a.iter().copied().collect();
        assert_eq!(items, [1, 2, 2, 2, 3]);
    }
}
