use crate::support::constraint::{Constrained, ConstraintError, UnitInterval};

/// Vapor mass fraction of a saturated mixture, `0 ≤ x ≤ 1`.
///
/// Zero is saturated liquid and one is saturated vapor.
///
/// # Example
///
/// ```
/// use twine_rankine::support::thermo::Quality;
///
/// let x = Quality::new(0.68).unwrap();
/// assert_eq!(x.value(), 0.68);
/// assert!(Quality::new(1.5).is_err());
/// assert_eq!(Quality::saturated_vapor().value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quality(Constrained<f64, UnitInterval>);

impl Quality {
    /// Creates a quality from a vapor mass fraction.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `x` is outside `[0, 1]` or NaN.
    pub fn new(x: f64) -> Result<Self, ConstraintError> {
        UnitInterval::new(x).map(Self)
    }

    /// Quality of saturated liquid (`x = 0`).
    #[must_use]
    pub fn saturated_liquid() -> Self {
        Self(UnitInterval::zero())
    }

    /// Quality of saturated vapor (`x = 1`).
    #[must_use]
    pub fn saturated_vapor() -> Self {
        Self(UnitInterval::one())
    }

    /// Returns the vapor mass fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

impl From<Constrained<f64, UnitInterval>> for Quality {
    fn from(x: Constrained<f64, UnitInterval>) -> Self {
        Self(x)
    }
}
