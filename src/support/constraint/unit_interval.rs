mod closed;
mod lower_open;

pub use closed::UnitInterval;
pub use lower_open::UnitIntervalLowerOpen;

/// Supplies the endpoints 0 and 1 for types bounded by a unit interval.
///
/// Implementations must satisfy `zero() ≤ one()` under the type's `PartialOrd`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}
