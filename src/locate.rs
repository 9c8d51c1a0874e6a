//! Binary search for insertion points.
//!
//! The search is written against an index probe instead of a slice so it
//! works over any indexable storage, including the two halves of a ring
//! buffer.
//!
//! Ties are resolved by the first probe that answers `Equal`. Among several
//! equal elements that is not necessarily the leftmost one; which one is hit
//! depends on the search path, and callers may rely on that placement.

use std::cmp::Ordering;
use std::ops::Range;

/// Outcome of [`binary_search_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// An element comparing `Equal` was found at this index.
    Found(usize),
    /// No equal element; this is where one would be inserted.
    Vacant(usize),
}

impl Position {
    /// Returns the insertion point for both outcomes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortvec::Position;
    ///
    /// assert_eq!(Position::Found(2).index(), 2);
    /// assert_eq!(Position::Vacant(3).index(), 3);
    /// ```
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Found(index) | Self::Vacant(index) => index,
        }
    }

    /// Returns the index of the equal element, if one was found.
    #[inline]
    pub const fn found(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::Vacant(_) => None,
        }
    }
}

/// Searches `range` for a position under an ordering probe.
///
/// `probe(index)` must report how the element stored at `index` is ordered
/// relative to the needle. The probed indices are assumed to be sorted under
/// the same relation. Runs in O(log n) probes.
///
/// # Errors
///
/// Returns the first error produced by `probe` without probing further.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use sortvec::{Position, binary_search_by};
///
/// let haystack = [1, 2, 4];
/// let position = binary_search_by(0..haystack.len(), |index| {
///     Ok::<_, Infallible>(haystack[index].cmp(&3))
/// });
/// assert_eq!(position, Ok(Position::Vacant(2)));
/// ```
pub fn binary_search_by<E, F>(range: Range<usize>, mut probe: F) -> Result<Position, E>
where
    F: FnMut(usize) -> Result<Ordering, E>,
{
    let mut low = range.start;
    // Exclusive bound; the midpoint is floor((low + high - 1) / 2).
    let mut high = range.end;

    while low < high {
        let middle = low + (high - low - 1) / 2;
        match probe(middle)? {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Ok(Position::Found(middle)),
        }
    }

    Ok(Position::Vacant(low))
}
