//! A growable sequence that keeps itself sorted.
//!
//! This module provides [`SortedVec`], a mutable, indexable sequence whose
//! elements are kept sorted under a pluggable [`Relation`] while it offers
//! the mutation surface of an ordinary resizable array.
//!
//! # Overview
//!
//! Every mutation that adds elements first asks the locator for the
//! insertion point under the active relation, then applies the cheapest
//! storage operation for that point:
//!
//! ```text
//!   index == 0      -> push_front   O(1) amortized
//!   index == len    -> push_back    O(1) amortized
//!   otherwise       -> insert       O(n)
//! ```
//!
//! Storage is a ring buffer (`VecDeque`), so both ends are cheap.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity          |
//! |------------------|---------------------|
//! | `push`           | O(log n) + O(n)     |
//! | `find_index_for` | O(log n)            |
//! | `index_of`       | O(log n)            |
//! | `splice`         | O(n) per insertion  |
//! | `resort`         | O(n log n)          |
//! | `reverse`        | O(n)                |
//!
//! # Examples
//!
//! ```rust
//! use sortvec::{Relation, SortedVec};
//!
//! let mut numbers = SortedVec::attach(vec![1, 2, 4]).unwrap();
//! assert_eq!(numbers.push_many([3, 0, 5]).unwrap(), 6);
//! assert_eq!(numbers, vec![0, 1, 2, 3, 4, 5]);
//!
//! // Ranged replace: the start index selects what is removed, replacements
//! // land at their sorted position.
//! let removed = numbers.splice(1, 2, [9]).unwrap();
//! assert_eq!(removed, vec![1, 2]);
//! assert_eq!(numbers, vec![0, 3, 4, 5, 9]);
//!
//! // Switching the relation re-sorts once.
//! numbers
//!     .resort_with([Relation::by(|left: &i32, right: &i32| right.cmp(left))])
//!     .unwrap();
//! assert_eq!(numbers, vec![9, 5, 4, 3, 0]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt::{self, Debug};
use std::ops::Index;

use tracing::{debug, trace};

use crate::error::{AdaptationError, SortedVecError};
use crate::locate::{Position, binary_search_by};
use crate::relation::{Relation, RelationManager};
use crate::source::{ElementSource, adapt};

/// A sequence kept sorted under a pluggable ordering relation.
///
/// Elements compare through the active [`Relation`]; the natural order of
/// `T` is used when none is supplied. The sequence is sorted before and
/// after every public operation.
///
/// # Type Parameters
///
/// * `T` - The element type. Operations that compare elements require
///   `PartialOrd + Debug`, since the natural order is always the final
///   tie-breaker and reports incomparable operands by their `Debug` form.
///   This holds even when every installed relation is a custom comparator,
///   so a type ordered only through [`Relation::by_key`] still needs
///   `PartialOrd`. Derive it on the element type, or wrap the element in a
///   newtype whose `PartialOrd` forwards to the key.
///
/// # Examples
///
/// ```rust
/// use sortvec::SortedVec;
///
/// let mut sorted = SortedVec::new();
/// sorted.push(3).unwrap();
/// sorted.push(1).unwrap();
/// sorted.push(2).unwrap();
///
/// assert_eq!(sorted, vec![1, 2, 3]);
/// assert_eq!(sorted.index_of(&2).unwrap(), Some(1));
/// ```
#[derive(Clone)]
pub struct SortedVec<T> {
    elements: VecDeque<T>,
    relations: RelationManager<T>,
}

impl<T> SortedVec<T> {
    /// Creates an empty sequence ordered by the natural order.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: VecDeque::new(),
            relations: RelationManager::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: VecDeque::with_capacity(capacity),
            relations: RelationManager::new(),
        }
    }

    /// Creates an empty sequence ordered by `relation`.
    #[must_use]
    pub const fn with_relation(relation: Relation<T>) -> Self {
        Self {
            elements: VecDeque::new(),
            relations: RelationManager::with_relation(relation),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the first element, the smallest under the active relation.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Returns the last element, the largest under the active relation.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.elements.back()
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as two slices, front part first.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.elements.as_slices()
    }

    /// Rearranges the storage so it is contiguous and returns it as a slice.
    pub fn as_contiguous(&mut self) -> &[T] {
        self.elements.make_contiguous()
    }

    /// Consumes the sequence and returns its elements in order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into()
    }

    /// Returns the active relation.
    pub const fn relation(&self) -> &Relation<T> {
        self.relations.relation()
    }

    /// Returns `true` if the active relation is the result of [`reverse`](Self::reverse).
    pub const fn is_inverted(&self) -> bool {
        self.relations.is_inverted()
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop_back()
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.elements.remove(index)
    }

    /// Keeps the first `len` elements and drops the rest.
    pub fn truncate(&mut self, len: usize) {
        self.elements.truncate(len);
    }

    /// Removes every element, keeping the relation.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(predicate);
    }

    /// Reverses the sequence and inverts the relation.
    ///
    /// Since the elements are sorted under the old relation, reversing the
    /// buffer sorts them under the inverted one without comparing anything.
    /// Calling `reverse` twice restores both the order and the original
    /// relation object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortvec::SortedVec;
    ///
    /// let mut sorted = SortedVec::attach(vec![1, 2, 4]).unwrap();
    /// sorted.reverse();
    /// assert_eq!(sorted, vec![4, 2, 1]);
    ///
    /// sorted.push(3).unwrap();
    /// assert_eq!(sorted, vec![4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        self.relations.invert();
        self.elements.make_contiguous().reverse();
    }
}

impl<T: PartialOrd + Debug> SortedVec<T> {
    /// Attaches order maintenance to a collection, using the natural order.
    ///
    /// Non-empty collections are sorted immediately.
    ///
    /// # Errors
    ///
    /// - [`SortedVecError::AlreadyAttached`] if `source` already maintains
    ///   its own order
    /// - [`SortedVecError::Adaptation`] if `source` cannot hand over its
    ///   elements
    /// - [`SortedVecError::UnstableComparison`] if two elements cannot be
    ///   ordered
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortvec::SortedVec;
    ///
    /// let sorted = SortedVec::attach(vec![5, 2, 1]).unwrap();
    /// assert_eq!(sorted, vec![1, 2, 5]);
    /// ```
    pub fn attach<S>(source: S) -> Result<Self, SortedVecError>
    where
        S: ElementSource<T>,
    {
        Self::attach_with(source, [])
    }

    /// Attaches order maintenance to a collection under `relations`.
    ///
    /// The relations are installed as by [`resort_with`](Self::resort_with):
    /// none keeps the natural order, several are composed left to right.
    /// Non-empty collections are sorted immediately.
    ///
    /// # Errors
    ///
    /// Same as [`attach`](Self::attach).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortvec::{Relation, SortedVec};
    ///
    /// let first_letter = Relation::by_key(|word: &&str| word.chars().next());
    /// let longest_first = Relation::by(|left: &&str, right: &&str| right.len().cmp(&left.len()));
    ///
    /// let words = SortedVec::attach_with(
    ///     vec!["bb", "a", "cc", "b", "aa", "c"],
    ///     [first_letter, longest_first],
    /// )
    /// .unwrap();
    /// assert_eq!(words, vec!["aa", "a", "bb", "b", "cc", "c"]);
    /// ```
    pub fn attach_with<S, I>(source: S, relations: I) -> Result<Self, SortedVecError>
    where
        S: ElementSource<T>,
        I: IntoIterator<Item = Relation<T>>,
    {
        if source.is_order_maintaining() {
            return Err(SortedVecError::AlreadyAttached);
        }

        let elements = adapt(source)?;
        let mut relations_manager = RelationManager::new();
        relations_manager.set(relations);

        let mut sorted = Self {
            elements: elements.into(),
            relations: relations_manager,
        };
        if !sorted.is_empty() {
            sorted.sort_elements()?;
        }
        debug!(len = sorted.len(), "attached collection");
        Ok(sorted)
    }

    /// Wraps elements that are already sorted under `relation`.
    ///
    /// No sorting is performed. In debug builds the order is asserted.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `elements` is not sorted under `relation`.
    #[must_use]
    pub fn from_sorted(elements: Vec<T>, relation: Relation<T>) -> Self {
        let sorted = Self {
            elements: elements.into(),
            relations: RelationManager::with_relation(relation),
        };
        debug_assert!(
            sorted.is_sorted(),
            "from_sorted requires elements sorted under the given relation"
        );
        sorted
    }

    /// Returns `true` if every adjacent pair is ordered under the active
    /// relation. A failing comparison counts as unsorted.
    pub fn is_sorted(&self) -> bool {
        self.elements
            .iter()
            .zip(self.elements.iter().skip(1))
            .all(|(left, right)| {
                matches!(
                    self.relations.compare(left, right),
                    Ok(Ordering::Less | Ordering::Equal)
                )
            })
    }

    /// Returns the index at which `element` would be inserted.
    ///
    /// The result lies in `[0, len]`. When equal elements exist, the index of
    /// the first one met by the binary search is returned.
    ///
    /// # Errors
    ///
    /// Propagates comparison errors of the active relation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortvec::SortedVec;
    ///
    /// let sorted = SortedVec::attach(vec![1, 2, 4]).unwrap();
    /// assert_eq!(sorted.find_index_for(&3).unwrap(), 2);
    /// assert_eq!(sorted.find_index_for(&5).unwrap(), 3);
    /// ```
    pub fn find_index_for(&self, element: &T) -> Result<usize, SortedVecError> {
        self.locate(element, 0).map(Position::index)
    }

    /// Returns the index of an element equal to `element` under the active
    /// relation, or `None`.
    ///
    /// # Errors
    ///
    /// Propagates comparison errors of the active relation.
    pub fn index_of(&self, element: &T) -> Result<Option<usize>, SortedVecError> {
        self.index_of_from(element, 0)
    }

    /// Like [`index_of`](Self::index_of), but only considers indices from
    /// `from` onwards. The returned index is relative to the whole sequence.
    ///
    /// # Errors
    ///
    /// Propagates comparison errors of the active relation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortvec::SortedVec;
    ///
    /// let sorted = SortedVec::attach(vec![1, 2, 4, 8]).unwrap();
    /// assert_eq!(sorted.index_of_from(&4, 1).unwrap(), Some(2));
    /// assert_eq!(sorted.index_of_from(&2, 2).unwrap(), None);
    /// ```
    pub fn index_of_from(&self, element: &T, from: usize) -> Result<Option<usize>, SortedVecError> {
        self.locate(element, from).map(Position::found)
    }

    /// Returns `true` if an element equal to `element` is present.
    ///
    /// # Errors
    ///
    /// Propagates comparison errors of the active relation.
    pub fn contains(&self, element: &T) -> Result<bool, SortedVecError> {
        self.index_of(element).map(|index| index.is_some())
    }

    /// Inserts `element` at its sorted position and returns the new length.
    ///
    /// # Errors
    ///
    /// Propagates comparison errors of the active relation; the sequence is
    /// left unchanged in that case.
    pub fn push(&mut self, element: T) -> Result<usize, SortedVecError> {
        self.place(element)?;
        Ok(self.len())
    }

    /// Inserts every element in turn and returns the new length.
    ///
    /// Each element is positioned against the sequence as already extended
    /// by the elements before it.
    ///
    /// # Errors
    ///
    /// Stops at the first comparison error. Elements inserted before it stay
    /// in the sequence; the failing element and those after it are dropped.
    pub fn push_many<I>(&mut self, elements: I) -> Result<usize, SortedVecError>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        self.elements.reserve(elements.size_hint().0);
        for element in elements {
            self.place(element)?;
        }
        Ok(self.len())
    }

    /// Front-insertion entry point; behaves exactly like [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Same as [`push`](Self::push).
    pub fn unshift(&mut self, element: T) -> Result<usize, SortedVecError> {
        self.push(element)
    }

    /// Front-insertion entry point; behaves exactly like
    /// [`push_many`](Self::push_many).
    ///
    /// # Errors
    ///
    /// Same as [`push_many`](Self::push_many).
    pub fn unshift_many<I>(&mut self, elements: I) -> Result<usize, SortedVecError>
    where
        I: IntoIterator<Item = T>,
    {
        self.push_many(elements)
    }

    /// Removes `remove_count` elements starting at `start`, then inserts
    /// `elements` at their sorted positions.
    ///
    /// `start` only selects what is removed; it does not decide where the
    /// new elements land. The removed range is clamped to the sequence, and
    /// nothing is removed when `remove_count` is zero. Returns the removed
    /// elements in their original order.
    ///
    /// # Errors
    ///
    /// Propagates comparison errors raised while inserting. The removal has
    /// already happened by then: the removed elements are dropped, and
    /// replacements placed before the failing one stay in the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortvec::SortedVec;
    ///
    /// let mut sorted = SortedVec::attach(vec![1, 2, 4]).unwrap();
    /// let removed = sorted.splice(1, 3, []).unwrap();
    /// assert_eq!(removed, vec![2, 4]);
    /// assert_eq!(sorted, vec![1]);
    /// ```
    pub fn splice<I>(
        &mut self,
        start: usize,
        remove_count: usize,
        elements: I,
    ) -> Result<Vec<T>, SortedVecError>
    where
        I: IntoIterator<Item = T>,
    {
        let removed = if remove_count == 0 {
            Vec::new()
        } else {
            let start = start.min(self.len());
            let end = start.saturating_add(remove_count).min(self.len());
            self.elements.drain(start..end).collect()
        };

        self.push_many(elements)?;
        Ok(removed)
    }

    /// Sorts the whole sequence once under the active relation.
    ///
    /// # Errors
    ///
    /// Returns the first comparison error met while sorting. The order of
    /// the elements is unspecified afterwards.
    pub fn resort(&mut self) -> Result<(), SortedVecError> {
        self.resort_with([])
    }

    /// Installs `relations` and sorts the whole sequence once under them.
    ///
    /// With no relations the active one is kept. One relation is installed
    /// as is, several are composed left to right and fall back to the
    /// natural order when all of them tie. Installing clears the inversion
    /// left by [`reverse`](Self::reverse).
    ///
    /// # Errors
    ///
    /// Returns the first comparison error met while sorting; the order of
    /// the elements is unspecified afterwards. Comparisons after the failure
    /// answer `Equal`, which the standard library sort may detect as an
    /// inconsistent order and panic on, most likely for large inputs.
    pub fn resort_with<I>(&mut self, relations: I) -> Result<(), SortedVecError>
    where
        I: IntoIterator<Item = Relation<T>>,
    {
        self.relations.set(relations);
        self.sort_elements()
    }

    fn locate(&self, element: &T, from: usize) -> Result<Position, SortedVecError> {
        let start = from.min(self.elements.len());
        binary_search_by(start..self.elements.len(), |index| {
            self.relations.compare(&self.elements[index], element)
        })
    }

    fn place(&mut self, element: T) -> Result<(), SortedVecError> {
        let index = self.find_index_for(&element)?;

        if index == 0 {
            trace!(index, path = "front", "placing element");
            self.elements.push_front(element);
        } else if index == self.elements.len() {
            trace!(index, path = "back", "placing element");
            self.elements.push_back(element);
        } else {
            trace!(index, path = "middle", "placing element");
            self.elements.insert(index, element);
        }
        Ok(())
    }

    fn sort_elements(&mut self) -> Result<(), SortedVecError> {
        debug!(
            len = self.elements.len(),
            relation = ?self.relations.relation(),
            "sorting elements"
        );

        let relations = &self.relations;
        let mut failure = None;
        self.elements.make_contiguous().sort_by(|left, right| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            relations.compare(left, right).unwrap_or_else(|error| {
                failure = Some(error);
                Ordering::Equal
            })
        });

        failure.map_or(Ok(()), Err)
    }
}

impl<T> ElementSource<T> for SortedVec<T> {
    fn into_elements(self) -> Result<Vec<T>, AdaptationError> {
        Ok(self.into_vec())
    }

    fn is_order_maintaining(&self) -> bool {
        true
    }
}

impl<T> Default for SortedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SortedVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortedVec")
            .field("elements", &self.elements)
            .field("relation", self.relations.relation())
            .field("inverted", &self.relations.is_inverted())
            .finish()
    }
}

impl<T> Index<usize> for SortedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T: PartialEq> PartialEq for SortedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for SortedVec<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for SortedVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.elements == *other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for SortedVec<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.elements == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SortedVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.elements == *other
    }
}

impl<T> IntoIterator for SortedVec<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedVec<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(SortedVec<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SortedVec<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedVecVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedVecVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedVecVisitor<T>
where
    T: serde::Deserialize<'de> + PartialOrd + Debug,
{
    type Value = SortedVec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        SortedVec::attach(elements).map_err(serde::de::Error::custom)
    }
}

/// Deserializes under the natural order, sorting the input.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedVec<T>
where
    T: serde::Deserialize<'de> + PartialOrd + Debug,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedVecVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
