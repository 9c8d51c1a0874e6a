//! # sortvec
//!
//! A self-maintaining sorted sequence for Rust.
//!
//! ## Overview
//!
//! [`SortedVec`] wraps a growable buffer and keeps it sorted under a
//! pluggable ordering relation while exposing the mutation surface of an
//! ordinary resizable array:
//!
//! - **Relations**: the natural order, a single comparator, a composed chain
//!   of comparators with tie-break fallthrough, or the inversion of any of
//!   these ([`Relation`])
//! - **Locator**: binary search for the insertion point of an element
//!   ([`binary_search_by`], [`Position`])
//! - **Mutation**: `push`, `unshift`, `splice`, `resort`, `reverse`, each of
//!   which restores sortedness before returning
//! - **Adaptation**: [`ElementSource`] turns foreign collections into the
//!   elements a [`SortedVec`] is attached to
//!
//! ## Feature Flags
//!
//! - `arc`: share relations through `Arc` and require `Send + Sync`
//!   comparators, making [`SortedVec`] usable across threads
//! - `serde`: serialize as a plain sequence, deserialize under the natural
//!   order
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use sortvec::prelude::*;
//!
//! let mut numbers = SortedVec::attach(vec![1, 2, 4]).unwrap();
//! numbers.push(3).unwrap();
//! assert_eq!(numbers, vec![1, 2, 3, 4]);
//!
//! numbers.reverse();
//! numbers.push(0).unwrap();
//! assert_eq!(numbers, vec![4, 3, 2, 1, 0]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sortvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AdaptationError, SortedVecError, UnstableComparisonError};
    pub use crate::locate::Position;
    pub use crate::relation::Relation;
    pub use crate::sorted_vec::SortedVec;
    pub use crate::source::ElementSource;
}

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type used to share relations.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

pub mod error;
pub mod locate;
pub mod natural;
pub mod relation;
pub mod sorted_vec;
pub mod source;

pub use error::{AdaptationError, SortedVecError, UnstableComparisonError};
pub use locate::{Position, binary_search_by};
pub use natural::natural_order;
pub use relation::{Relation, RelationFn, RelationManager};
pub use sorted_vec::SortedVec;
pub use source::{ElementSource, adapt};
