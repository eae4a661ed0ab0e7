//! Extensions to [`uom`].
//!
//! Every physical value in this crate is a [`uom`] quantity. This module adds
//! the specific-property quantities a steam cycle needs that [`uom`] does not
//! name directly, plus a helper for temperature differences.
//!
//! ```
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
//! use uom::si::temperature_interval::kelvin;
//! use twine_rankine::support::units::TemperatureDifference;
//!
//! let t_inlet = ThermodynamicTemperature::new::<degree_celsius>(400.0);
//! let t_sat = ThermodynamicTemperature::new::<degree_celsius>(295.0);
//! let superheat = t_inlet.minus(t_sat);
//! assert!((superheat.get::<kelvin>() - 105.0).abs() < 1e-9);
//! ```

mod temperature_difference;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

pub use temperature_difference::TemperatureDifference;

/// Specific enthalpy, J/kg in SI.
///
/// Shares its dimension with [`uom::si::f64::AvailableEnergy`], so the
/// `uom::si::available_energy` units apply (e.g. `kilojoule_per_kilogram`).
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
///
/// Use the `uom::si::specific_heat_capacity` units to read and write it.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific internal energy, J/kg in SI.
pub type SpecificInternalEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
