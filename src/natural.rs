//! The natural order, used whenever no relation is supplied.
//!
//! Unlike `PartialOrd::partial_cmp(..).unwrap_or(Equal)`, operands that are
//! mutually incomparable (such as `NaN`) are reported as an error instead of
//! being treated as equal, which would otherwise break sortedness silently.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::UnstableComparisonError;

/// Compares two values by their natural (`PartialOrd`) order.
///
/// # Errors
///
/// Returns [`UnstableComparisonError`] if `left` is neither equal to, greater
/// than nor less than `right`.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use sortvec::natural_order;
///
/// assert_eq!(natural_order(&1, &1), Ok(Ordering::Equal));
/// assert_eq!(natural_order(&2, &1), Ok(Ordering::Greater));
/// assert_eq!(natural_order(&1, &2), Ok(Ordering::Less));
/// assert!(natural_order(&1.0, &f64::NAN).is_err());
/// ```
pub fn natural_order<T>(left: &T, right: &T) -> Result<Ordering, UnstableComparisonError>
where
    T: PartialOrd + Debug + ?Sized,
{
    if left == right {
        Ok(Ordering::Equal)
    } else if left > right {
        Ok(Ordering::Greater)
    } else if left < right {
        Ok(Ordering::Less)
    } else {
        Err(UnstableComparisonError::new(left, right))
    }
}
