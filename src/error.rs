//! Error types for sorted sequences.
//!
//! Every error in this crate signals a broken contract (a malformed input
//! collection, a comparator that cannot order its operands, or a collection
//! that is attached twice) rather than a transient condition, so none of
//! them is retried internally.

/// Represents a comparison between two operands that are neither equal,
/// greater nor less than each other under the natural order.
///
/// Both operands are captured through their `Debug` rendering so the error
/// stays `'static` regardless of the element type.
///
/// # Examples
///
/// ```rust
/// use sortvec::UnstableComparisonError;
///
/// let error = UnstableComparisonError::new(&1.0, &f64::NAN);
/// assert_eq!(
///     format!("{error}"),
///     "Unstable comparison: 1.0 compared to NaN"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnstableComparisonError {
    /// `Debug` rendering of the left operand.
    pub left: String,
    /// `Debug` rendering of the right operand.
    pub right: String,
}

impl UnstableComparisonError {
    /// Captures both offending operands.
    pub fn new<T: std::fmt::Debug + ?Sized>(left: &T, right: &T) -> Self {
        Self {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }
}

impl std::fmt::Display for UnstableComparisonError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Unstable comparison: {} compared to {}",
            self.left, self.right
        )
    }
}

impl std::error::Error for UnstableComparisonError {}

/// Represents a foreign collection that could not be turned into a plain
/// sequence of elements.
///
/// # Examples
///
/// ```rust
/// use sortvec::AdaptationError;
///
/// struct Archive;
///
/// let error = AdaptationError::new::<Archive>("archive is sealed");
/// assert!(format!("{error}").ends_with("Archive into a sequence: archive is sealed"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptationError {
    /// The type name of the collection that failed to adapt.
    pub source_type: &'static str,
    /// Why no elements could be extracted.
    pub reason: String,
}

impl AdaptationError {
    /// Creates an error for the collection type `S`.
    pub fn new<S: ?Sized>(reason: impl Into<String>) -> Self {
        Self {
            source_type: std::any::type_name::<S>(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for AdaptationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "cannot adapt {} into a sequence: {}",
            self.source_type, self.reason
        )
    }
}

impl std::error::Error for AdaptationError {}

/// Represents errors raised by [`SortedVec`](crate::SortedVec) operations.
///
/// # Examples
///
/// ```rust
/// use sortvec::{SortedVec, SortedVecError};
///
/// let sorted = SortedVec::attach(vec![3, 1, 2]).unwrap();
/// let error = SortedVec::attach(sorted).unwrap_err();
/// assert_eq!(error, SortedVecError::AlreadyAttached);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortedVecError {
    /// The collection already maintains its own order.
    AlreadyAttached,
    /// The natural order could not compare two operands.
    UnstableComparison(UnstableComparisonError),
    /// A foreign collection could not be adapted.
    Adaptation(AdaptationError),
}

impl std::fmt::Display for SortedVecError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyAttached => write!(
                formatter,
                "collection is already order-maintaining. Attach it only once."
            ),
            Self::UnstableComparison(error) => write!(formatter, "{error}"),
            Self::Adaptation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SortedVecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AlreadyAttached => None,
            Self::UnstableComparison(error) => Some(error),
            Self::Adaptation(error) => Some(error),
        }
    }
}

impl From<UnstableComparisonError> for SortedVecError {
    fn from(error: UnstableComparisonError) -> Self {
        Self::UnstableComparison(error)
    }
}

impl From<AdaptationError> for SortedVecError {
    fn from(error: AdaptationError) -> Self {
        Self::Adaptation(error)
    }
}
