//! Adapting foreign collections into plain element sequences.
//!
//! [`SortedVec::attach`](crate::SortedVec::attach) accepts anything that
//! implements [`ElementSource`]. Collections from other crates opt in by
//! implementing the trait themselves; there is no structural probing.
//!
//! # Examples
//!
//! ```rust
//! use sortvec::{AdaptationError, ElementSource, SortedVec};
//!
//! struct Inventory {
//!     items: Option<Vec<u32>>,
//! }
//!
//! impl ElementSource<u32> for Inventory {
//!     fn into_elements(self) -> Result<Vec<u32>, AdaptationError> {
//!         self.items
//!             .ok_or_else(|| AdaptationError::new::<Self>("inventory was never loaded"))
//!     }
//! }
//!
//! let sorted = SortedVec::attach(Inventory { items: Some(vec![3, 1, 2]) }).unwrap();
//! assert_eq!(sorted, vec![1, 2, 3]);
//!
//! assert!(SortedVec::attach(Inventory { items: None }).is_err());
//! ```

use std::collections::VecDeque;

use crate::error::AdaptationError;

/// A collection that can hand over its elements as an ordered sequence.
pub trait ElementSource<T> {
    /// Consumes the collection and returns its elements in their current
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`AdaptationError`] if the collection has no extractable
    /// elements.
    fn into_elements(self) -> Result<Vec<T>, AdaptationError>;

    /// Reserved marker: `true` for collections that already maintain their
    /// own order and must not be attached again.
    fn is_order_maintaining(&self) -> bool {
        false
    }
}

/// Extracts the elements of `source`.
///
/// # Errors
///
/// Propagates the [`AdaptationError`] of the source.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use sortvec::adapt;
///
/// let deque: VecDeque<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(adapt(deque), Ok(vec![3, 1, 2]));
/// ```
pub fn adapt<T, S>(source: S) -> Result<Vec<T>, AdaptationError>
where
    S: ElementSource<T>,
{
    source.into_elements()
}

impl<T> ElementSource<T> for Vec<T> {
    fn into_elements(self) -> Result<Vec<T>, AdaptationError> {
        Ok(self)
    }
}

impl<T, const N: usize> ElementSource<T> for [T; N] {
    fn into_elements(self) -> Result<Vec<T>, AdaptationError> {
        Ok(self.into())
    }
}

impl<T> ElementSource<T> for Box<[T]> {
    fn into_elements(self) -> Result<Vec<T>, AdaptationError> {
        Ok(self.into_vec())
    }
}

impl<T> ElementSource<T> for VecDeque<T> {
    fn into_elements(self) -> Result<Vec<T>, AdaptationError> {
        Ok(self.into())
    }
}

/// `None` stands for "no collection given" and yields no elements.
impl<T, S> ElementSource<T> for Option<S>
where
    S: ElementSource<T>,
{
    fn into_elements(self) -> Result<Vec<T>, AdaptationError> {
        self.map_or_else(|| Ok(Vec::new()), |source| source.into_elements())
    }

    fn is_order_maintaining(&self) -> bool {
        self.as_ref()
            .is_some_and(|source| <S as ElementSource<T>>::is_order_maintaining(source))
    }
}
