//! Numeric invariants checked once, at construction.
//!
//! A [`Constrained<T, C>`] value can only be built through [`Constrained::new`],
//! which runs the marker's [`Constraint::check`]. After that the wrapper is a
//! plain value with no further runtime cost.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero (pressures, sample counts)
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1` (vapor quality)
//! - [`UnitIntervalLowerOpen`]: Lower-open unit interval `0 < x ≤ 1`
//!   (isentropic efficiency)
//!
//! Each marker also provides an associated `new()` constructor, for example
//! `UnitIntervalLowerOpen::new(0.85)`.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval, UnitIntervalLowerOpen};

/// A numeric invariant enforced when a [`Constrained`] value is created.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value of type `T` known to satisfy constraint `C`.
///
/// # Example
///
/// ```
/// use twine_rankine::support::constraint::{Constrained, UnitIntervalLowerOpen};
///
/// let eta = Constrained::<f64, UnitIntervalLowerOpen>::new(0.85).unwrap();
/// assert_eq!(eta.into_inner(), 0.85);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
