//! Ordering relations and the manager that swaps them.
//!
//! A [`Relation`] is one of four shapes:
//!
//! ```text
//! Natural                 natural order (PartialOrd), fails on incomparables
//! Single(f)               one user comparator
//! Composed([r1, r2, ..])  first non-Equal answer wins, then Natural
//! Inverted(original)      reversed answer of `original`
//! ```
//!
//! Relations are cheap to clone: comparators live behind a reference
//! counter, so a clone shares the comparator and [`Relation::ptr_eq`] can
//! observe identity. Composition flattens nested compositions when it is
//! built, and inverting an inverted relation hands back the original itself.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use sortvec::Relation;
//!
//! let first_letter = Relation::by_key(|word: &&str| word.chars().next());
//! let longest_first = Relation::by(|left: &&str, right: &&str| right.len().cmp(&left.len()));
//! let relation = Relation::compose([first_letter, longest_first]);
//!
//! assert_eq!(relation.compare(&"aa", &"a"), Ok(Ordering::Less));
//! assert_eq!(relation.compare(&"b", &"aa"), Ok(Ordering::Greater));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use tracing::debug;

use crate::ReferenceCounter;
use crate::error::SortedVecError;
use crate::natural::natural_order;

/// A comparator usable as a [`Relation`].
///
/// Implemented for every `Fn(&T, &T) -> Ordering`; with the `arc` feature the
/// comparator must also be `Send + Sync`.
#[cfg(not(feature = "arc"))]
pub trait RelationFn<T>: Fn(&T, &T) -> Ordering {}

#[cfg(not(feature = "arc"))]
impl<T, F: Fn(&T, &T) -> Ordering> RelationFn<T> for F {}

/// A comparator usable as a [`Relation`].
///
/// Implemented for every `Fn(&T, &T) -> Ordering + Send + Sync`.
#[cfg(feature = "arc")]
pub trait RelationFn<T>: Fn(&T, &T) -> Ordering + Send + Sync {}

#[cfg(feature = "arc")]
impl<T, F: Fn(&T, &T) -> Ordering + Send + Sync> RelationFn<T> for F {}

/// An ordering relation over `T`.
pub enum Relation<T> {
    /// The natural order of `T`, see [`natural_order`].
    Natural,
    /// A single comparator.
    Single(ReferenceCounter<dyn RelationFn<T>>),
    /// Members evaluated left to right; never contains another `Composed`.
    Composed(ReferenceCounter<[Relation<T>]>),
    /// The reversal of the boxed original relation.
    Inverted(Box<Relation<T>>),
}

impl<T> Relation<T> {
    /// Wraps a comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use sortvec::Relation;
    ///
    /// let descending = Relation::by(|left: &i32, right: &i32| right.cmp(left));
    /// assert_eq!(descending.compare(&1, &2), Ok(Ordering::Greater));
    /// ```
    pub fn by<F>(compare: F) -> Self
    where
        F: RelationFn<T> + 'static,
    {
        Self::Single(ReferenceCounter::new(compare))
    }

    /// Builds a relation that orders elements by a projected key.
    ///
    /// The key is only used to compare; nothing is indexed by it.
    #[cfg(not(feature = "arc"))]
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::by(move |left: &T, right: &T| key(left).cmp(&key(right)))
    }

    /// Builds a relation that orders elements by a projected key.
    ///
    /// The key is only used to compare; nothing is indexed by it.
    #[cfg(feature = "arc")]
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::by(move |left: &T, right: &T| key(left).cmp(&key(right)))
    }

    /// Chains relations with tie-break fallthrough.
    ///
    /// Nested compositions are flattened. An empty input yields
    /// [`Relation::Natural`] and a single relation is returned as is.
    pub fn compose<I>(relations: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut members = Vec::new();
        for relation in relations {
            match relation {
                Self::Composed(nested) => members.extend(nested.iter().cloned()),
                other => members.push(other),
            }
        }

        match members.len() {
            0 => Self::Natural,
            1 => members.pop().unwrap_or(Self::Natural),
            _ => Self::Composed(members.into()),
        }
    }

    /// Returns the inversion of this relation.
    ///
    /// Inverting an [`Inverted`](Relation::Inverted) relation returns the
    /// original it was built from, not a doubly negated copy.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Inverted(original) => *original,
            other => Self::Inverted(Box::new(other)),
        }
    }

    /// Returns `true` for an [`Inverted`](Relation::Inverted) relation.
    pub const fn is_inverted(&self) -> bool {
        matches!(self, Self::Inverted(_))
    }

    /// Returns `true` if both relations are the same relation object.
    ///
    /// Clones share identity; two separately built relations with the same
    /// behavior do not.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Natural, Self::Natural) => true,
            (Self::Single(left), Self::Single(right)) => ReferenceCounter::ptr_eq(left, right),
            (Self::Composed(left), Self::Composed(right)) => ReferenceCounter::ptr_eq(left, right),
            (Self::Inverted(left), Self::Inverted(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl<T: PartialOrd + Debug> Relation<T> {
    /// Compares two elements under this relation.
    ///
    /// # Errors
    ///
    /// Returns [`SortedVecError::UnstableComparison`] when the natural order
    /// is consulted (directly or as the final fallthrough of a composition)
    /// and cannot order the operands.
    pub fn compare(&self, left: &T, right: &T) -> Result<Ordering, SortedVecError> {
        match self {
            Self::Natural => Ok(natural_order(left, right)?),
            Self::Single(compare) => Ok(compare(left, right)),
            Self::Composed(members) => {
                for member in members.iter() {
                    let ordering = member.compare(left, right)?;
                    if ordering != Ordering::Equal {
                        return Ok(ordering);
                    }
                }
                Ok(natural_order(left, right)?)
            }
            Self::Inverted(original) => original.compare(left, right).map(Ordering::reverse),
        }
    }
}

impl<T> Clone for Relation<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Natural => Self::Natural,
            Self::Single(compare) => Self::Single(ReferenceCounter::clone(compare)),
            Self::Composed(members) => Self::Composed(ReferenceCounter::clone(members)),
            Self::Inverted(original) => Self::Inverted(original.clone()),
        }
    }
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self::Natural
    }
}

impl<T> Debug for Relation<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural => formatter.write_str("Natural"),
            Self::Single(_) => formatter.write_str("Single(<fn>)"),
            Self::Composed(members) => {
                let members: &[Self] = members;
                formatter.debug_tuple("Composed").field(&members).finish()
            }
            Self::Inverted(original) => formatter.debug_tuple("Inverted").field(original).finish(),
        }
    }
}

// =============================================================================
// RelationManager
// =============================================================================

/// Owns the active relation of a sorted sequence and whether it is
/// currently an inversion produced by [`invert`](Self::invert).
pub struct RelationManager<T> {
    relation: Relation<T>,
    inverted: bool,
}

impl<T> RelationManager<T> {
    /// Creates a manager holding the natural order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            relation: Relation::Natural,
            inverted: false,
        }
    }

    /// Creates a manager holding `relation`, not flagged as inverted.
    #[must_use]
    pub const fn with_relation(relation: Relation<T>) -> Self {
        Self {
            relation,
            inverted: false,
        }
    }

    /// Returns the active relation.
    pub const fn relation(&self) -> &Relation<T> {
        &self.relation
    }

    /// Returns `true` if the active relation was produced by [`invert`](Self::invert).
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Installs new relations.
    ///
    /// - no relation: the active relation is kept and nothing changes
    /// - one relation: installed verbatim
    /// - several: installed as a [`Relation::compose`] chain
    ///
    /// Installing clears the inverted flag. Returns `true` if a relation was
    /// installed.
    pub fn set<I>(&mut self, relations: I) -> bool
    where
        I: IntoIterator<Item = Relation<T>>,
    {
        let mut relations = relations.into_iter().peekable();
        if relations.peek().is_none() {
            return false;
        }

        self.relation = Relation::compose(relations);
        self.inverted = false;
        debug!(relation = ?self.relation, "installed relation");
        true
    }

    /// Toggles inversion of the active relation.
    ///
    /// Inverting twice restores the original relation object.
    pub fn invert(&mut self) {
        let current = std::mem::take(&mut self.relation);
        self.relation = if self.inverted {
            match current {
                Relation::Inverted(original) => *original,
                other => Relation::Inverted(Box::new(other)),
            }
        } else {
            Relation::Inverted(Box::new(current))
        };
        self.inverted = !self.inverted;
        debug!(inverted = self.inverted, "inverted relation");
    }
}

impl<T: PartialOrd + Debug> RelationManager<T> {
    /// Compares two elements under the active relation.
    ///
    /// # Errors
    ///
    /// Propagates [`Relation::compare`] errors unchanged.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Result<Ordering, SortedVecError> {
        self.relation.compare(left, right)
    }
}

impl<T> Clone for RelationManager<T> {
    fn clone(&self) -> Self {
        Self {
            relation: self.relation.clone(),
            inverted: self.inverted,
        }
    }
}

impl<T> Default for RelationManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for RelationManager<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RelationManager")
            .field("relation", &self.relation)
            .field("inverted", &self.inverted)
            .finish()
    }
}
