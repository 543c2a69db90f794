//! Flat sorted sequence with cheap in-order insertion.
//!
//! This module provides [`OrderedSequence`], a `Vec`-backed collection that
//! keeps its elements sorted under a [`SortOrder`] strategy.
//!
//! # Overview
//!
//! The storage is a single contiguous `Vec<T>`. Sorted storage gives binary
//! search lookups and zero-copy pagination through [`OrderedSequence::slice`],
//! at the price of O(n log n) insertion in the worst case.
//!
//! Insertion is tuned for traffic that arrives mostly in order: the new element
//! is appended and only the last two elements are compared. When they are in
//! order the whole sequence still is, and nothing else happens. Otherwise the
//! whole sequence is re-sorted.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity                                        |
//! |------------------|---------------------------------------------------|
//! | `insert`         | O(1) amortized in order, O(n log n) out of order  |
//! | `insert_batch`   | O(n log n)                                        |
//! | `get_index`      | O(log n)                                          |
//! | `get`/`contains` | O(log n)                                          |
//! | `search_greater` | O(log n)                                          |
//! | `search_by`      | O(log n)                                          |
//! | `slice`          | O(log n)                                          |
//! | `remove`         | O(n log n)                                        |
//! | `check`          | O(n)                                              |
//!
//! # Examples
//!
//! ```rust
//! use sorted_bags::RawSequence;
//!
//! let mut sequence = RawSequence::new();
//! for value in [3, 1, 0, 2] {
//!     sequence.insert(value);
//! }
//! assert_eq!(sequence.as_slice(), &[0, 1, 2, 3]);
//!
//! // Pagination: everything strictly after the marker, at most two elements
//! assert_eq!(sequence.slice(&1, 2), &[2, 3]);
//!
//! // Removal of an absent element is a no-op
//! assert_eq!(sequence.remove(&42), None);
//! assert_eq!(sequence.len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::error::CheckError;
use crate::order::{Natural, SortOrder};
use crate::page::clamp_page_size;

/// A sorted, contiguous sequence of elements.
///
/// The ordering is supplied by the strategy type `O` (see [`crate::order`]).
/// The sequence owns its storage; every borrowed view it hands out is tied to
/// `&self`, so the borrow checker rejects any mutation while a view is alive.
///
/// Duplicate order keys are accepted by insertion. Uniqueness is an invariant
/// checked on demand by [`check`](Self::check), not enforced eagerly.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `O` - The ordering strategy. Defaults to [`Natural`].
///
/// # Examples
///
/// ```rust
/// use sorted_bags::OrderedSequence;
///
/// let sequence: OrderedSequence<&str> = ["pear", "apple", "fig"].into_iter().collect();
/// assert_eq!(sequence.as_slice(), &["apple", "fig", "pear"]);
/// assert!(sequence.contains(&"fig"));
/// ```
pub struct OrderedSequence<T, O = Natural> {
    elements: Vec<T>,
    order: PhantomData<fn() -> O>,
}

impl<T, O> OrderedSequence<T, O> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let sequence: RawSequence<u32> = RawSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            order: PhantomData,
        }
    }

    /// Creates a new empty sequence able to hold `capacity` elements without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Consumes the sequence and returns its sorted backing `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T, O: SortOrder<T>> OrderedSequence<T, O> {
    /// Creates a sequence from elements in any order.
    ///
    /// The vector is reused as storage and sorted once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let sequence = RawSequence::from_unsorted(vec![9, 4, 6]);
    /// assert_eq!(sequence.as_slice(), &[4, 6, 9]);
    /// ```
    #[must_use]
    pub fn from_unsorted(elements: Vec<T>) -> Self {
        let mut sequence = Self {
            elements,
            order: PhantomData,
        };
        sequence.sort_all();
        sequence
    }

    /// Inserts an element, keeping the sequence sorted.
    ///
    /// The element is appended, then only the last two elements are compared.
    /// If they are in order no further work is done, which makes in-order
    /// arrival O(1) amortized. Otherwise the whole sequence is re-sorted.
    ///
    /// An element whose order key is already present is inserted next to its
    /// twin; see [`check`](Self::check).
    ///
    /// # Complexity
    ///
    /// - O(1) amortized when `element` is not smaller than the current maximum
    /// - O(n log n) otherwise
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let mut sequence = RawSequence::new();
    /// sequence.insert(10);
    /// sequence.insert(20);
    /// sequence.insert(15);
    /// assert_eq!(sequence.as_slice(), &[10, 15, 20]);
    /// ```
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        let needs_sort = match self.elements.as_slice() {
            [] | [_] => false,
            [_, _] => true,
            [.., previous, last] => O::compare(previous, last) == Ordering::Greater,
        };
        if needs_sort {
            tracing::trace!(len = self.elements.len(), "re-sorting after insert");
            self.sort_all();
        }
    }

    /// Appends every element of `elements`, then sorts the whole sequence once.
    ///
    /// There is no tail check here: a batch is assumed to disturb the order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let mut sequence = RawSequence::from_unsorted(vec![5, 1]);
    /// sequence.insert_batch([3, 0, 2]);
    /// assert_eq!(sequence.as_slice(), &[0, 1, 2, 3, 5]);
    /// ```
    pub fn insert_batch<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(elements);
        self.sort_all();
    }

    /// Returns the index of the element matching `key`, or `None`.
    ///
    /// Binary search for the leftmost element not less than `key`; the index is
    /// returned only if that element compares equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let sequence = RawSequence::from_unsorted(vec![30, 10, 20]);
    /// assert_eq!(sequence.get_index(&20), Some(1));
    /// assert_eq!(sequence.get_index(&25), None);
    /// ```
    #[must_use]
    pub fn get_index(&self, key: &O::Key) -> Option<usize> {
        let index = self
            .elements
            .partition_point(|element| O::compare_key(element, key) == Ordering::Less);
        self.elements
            .get(index)
            .and_then(|element| O::compare_key(element, key).is_eq().then_some(index))
    }

    /// Returns the index of the stored element equal to `element`, or `None`.
    ///
    /// Same search as [`get_index`](Self::get_index), driven by
    /// element-to-element comparison.
    #[must_use]
    pub fn position_of(&self, element: &T) -> Option<usize> {
        let index = self
            .elements
            .partition_point(|stored| O::compare(stored, element) == Ordering::Less);
        self.elements
            .get(index)
            .and_then(|stored| O::compare(stored, element).is_eq().then_some(index))
    }

    /// Returns a reference to the element matching `key`, or `None`.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &O::Key) -> Option<&T> {
        self.get_index(key).map(|index| &self.elements[index])
    }

    /// Returns `true` if an element matches `key`.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &O::Key) -> bool {
        self.get_index(key).is_some()
    }

    /// Returns the index of the first element strictly greater than `marker`.
    ///
    /// Returns `len()` when no element is greater. This is the cursor
    /// resolution step of [`slice`](Self::slice).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let sequence = RawSequence::from_unsorted(vec![0, 1, 2, 3]);
    /// assert_eq!(sequence.search_greater(&1), 2);
    /// assert_eq!(sequence.search_greater(&-5), 0);
    /// assert_eq!(sequence.search_greater(&3), sequence.len());
    /// ```
    #[must_use]
    pub fn search_greater(&self, marker: &O::Key) -> usize {
        self.elements
            .partition_point(|element| O::compare_key(element, marker).is_le())
    }

    /// Returns the first index for which `predicate` holds, or `None`.
    ///
    /// The predicate must be monotonic over the sequence order: `false` for a
    /// prefix of the elements and `true` for the rest. With any other
    /// predicate the returned index is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let sequence = RawSequence::from_unsorted(vec![1, 4, 9, 16]);
    /// assert_eq!(sequence.search_by(|value| *value >= 5), Some(2));
    /// assert_eq!(sequence.search_by(|value| *value > 100), None);
    /// ```
    #[must_use]
    pub fn search_by<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.elements.partition_point(|element| !predicate(element));
        (index < self.elements.len()).then_some(index)
    }

    /// Returns one page of elements strictly greater than `marker`.
    ///
    /// `max_count` is clamped into
    /// [`MIN_PAGE_SIZE`](crate::page::MIN_PAGE_SIZE)..=[`MAX_PAGE_SIZE`](crate::page::MAX_PAGE_SIZE),
    /// so a request for zero elements still yields one, and no page ever holds
    /// more than the ceiling. The result is empty when nothing follows the
    /// marker.
    ///
    /// The page borrows the sequence storage: no copy is made.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let sequence = RawSequence::from_unsorted(vec![0, 1, 2, 3]);
    /// assert_eq!(sequence.slice(&1, 2), &[2, 3]);
    /// assert_eq!(sequence.slice(&-1, 0), &[0]);
    /// assert_eq!(sequence.slice(&-1, 5000), &[0, 1, 2, 3]);
    /// assert!(sequence.slice(&3, 10).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, marker: &O::Key, max_count: usize) -> &[T] {
        self.page_from(self.search_greater(marker), max_count)
    }

    /// Returns the first page of elements, without a marker.
    ///
    /// `max_count` is clamped as in [`slice`](Self::slice).
    #[must_use]
    pub fn first_page(&self, max_count: usize) -> &[T] {
        self.page_from(0, max_count)
    }

    /// Removes the element equal to `element` and returns it.
    ///
    /// Removing an absent element is a no-op and returns `None`.
    ///
    /// The matched element is swapped with the last one and dropped off the end,
    /// then the remainder is re-sorted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::RawSequence;
    ///
    /// let mut sequence = RawSequence::from_unsorted(vec![0, 1, 2, 3]);
    /// assert_eq!(sequence.remove(&1), Some(1));
    /// assert_eq!(sequence.remove(&1), None);
    /// assert_eq!(sequence.as_slice(), &[0, 2, 3]);
    /// ```
    pub fn remove(&mut self, element: &T) -> Option<T> {
        match self.position_of(element) {
            Some(index) => Some(self.remove_at(index)),
            None => {
                tracing::trace!(len = self.elements.len(), "element absent, nothing removed");
                None
            }
        }
    }

    /// Removes the element matching `key` and returns it.
    ///
    /// Removing an absent key is a no-op and returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::order::PrimaryKey;
    /// use sorted_bags::KeyedSequence;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Job {
    ///     id: u32,
    /// }
    ///
    /// impl PrimaryKey for Job {
    ///     type Key = u32;
    ///
    ///     fn primary_key(&self) -> u32 {
    ///         self.id
    ///     }
    /// }
    ///
    /// let mut jobs: KeyedSequence<Job> = [Job { id: 2 }, Job { id: 1 }].into_iter().collect();
    /// assert_eq!(jobs.remove_by_key(&2), Some(Job { id: 2 }));
    /// assert_eq!(jobs.remove_by_key(&2), None);
    /// assert_eq!(jobs.len(), 1);
    /// ```
    pub fn remove_by_key(&mut self, key: &O::Key) -> Option<T> {
        match self.get_index(key) {
            Some(index) => Some(self.remove_at(index)),
            None => {
                tracing::trace!(len = self.elements.len(), "key absent, nothing removed");
                None
            }
        }
    }

    /// Validates the sequence invariants.
    ///
    /// Checks, in order, that the elements are sorted and that no two adjacent
    /// elements share an order key. Empty and single-element sequences always
    /// pass. Mutators never call this; it is a diagnostic for callers and tests.
    ///
    /// # Errors
    ///
    /// - [`CheckError::Unsorted`] if two elements are out of order
    /// - [`CheckError::Duplicates`] if two elements share an order key
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_bags::{CheckError, RawSequence};
    ///
    /// let mut sequence = RawSequence::from_unsorted(vec![2, 1]);
    /// assert_eq!(sequence.check(), Ok(()));
    ///
    /// sequence.insert(2);
    /// assert_eq!(sequence.check(), Err(CheckError::Duplicates));
    /// ```
    pub fn check(&self) -> Result<(), CheckError> {
        let violation = if !self
            .elements
            .is_sorted_by(|left, right| O::compare(left, right).is_le())
        {
            Some(CheckError::Unsorted)
        } else if self
            .elements
            .windows(2)
            .any(|pair| O::compare(&pair[0], &pair[1]).is_eq())
        {
            Some(CheckError::Duplicates)
        } else {
            None
        };

        violation.map_or(Ok(()), |error| {
            tracing::debug!(violation = %error, len = self.elements.len(), "invariant check failed");
            Err(error)
        })
    }

    /// Panics if [`check`](Self::check) reports a violation.
    ///
    /// # Panics
    ///
    /// Panics with the violation message when the sequence is unsorted or holds
    /// duplicates.
    #[track_caller]
    pub fn assert_valid(&self) {
        if let Err(error) = self.check() {
            panic!("ordered sequence invariant violated: {error}");
        }
    }

    fn sort_all(&mut self) {
        self.elements.sort_unstable_by(O::compare);
    }

    fn remove_at(&mut self, index: usize) -> T {
        let removed = self.elements.swap_remove(index);
        if !self.elements.is_empty() {
            self.sort_all();
        }
        removed
    }

    fn page_from(&self, start: usize, max_count: usize) -> &[T] {
        let remaining = self.elements.get(start..).unwrap_or(&[]);
        let count = remaining.len().min(clamp_page_size(max_count));
        &remaining[..count]
    }
}

// =============================================================================
// Parallel Support
// =============================================================================

#[cfg(feature = "rayon")]
impl<T: Send, O: SortOrder<T>> OrderedSequence<T, O> {
    /// Same as [`insert_batch`](Self::insert_batch), sorting on the rayon
    /// thread pool.
    ///
    /// Worth it for large batches only.
    pub fn par_insert_batch<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        use rayon::slice::ParallelSliceMut;

        self.elements.extend(elements);
        self.elements.par_sort_unstable_by(O::compare);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, O> Default for OrderedSequence<T, O> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O> Clone for OrderedSequence<T, O> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for OrderedSequence<T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: PartialEq, O> PartialEq for OrderedSequence<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, O> Eq for OrderedSequence<T, O> {}

impl<T, O> AsRef<[T]> for OrderedSequence<T, O> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<'a, T, O> IntoIterator for &'a OrderedSequence<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T, O> IntoIterator for OrderedSequence<T, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T, O: SortOrder<T>> FromIterator<T> for OrderedSequence<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<T, O: SortOrder<T>> Extend<T> for OrderedSequence<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_batch(iter);
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, O> serde::Serialize for OrderedSequence<T, O> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSequenceVisitor<T, O> {
    marker: PhantomData<fn() -> (T, O)>,
}

#[cfg(feature = "serde")]
impl<'de, T, O> serde::de::Visitor<'de> for OrderedSequenceVisitor<T, O>
where
    T: serde::Deserialize<'de>,
    O: SortOrder<T>,
{
    type Value = OrderedSequence<T, O>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // size_hint comes from the input; cap the preallocation.
        let capacity = access.size_hint().unwrap_or(0).min(4096);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(OrderedSequence::from_unsorted(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, O> serde::Deserialize<'de> for OrderedSequence<T, O>
where
    T: serde::Deserialize<'de>,
    O: SortOrder<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSequenceVisitor {
            marker: PhantomData,
        })
    }
}
