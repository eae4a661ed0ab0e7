use uom::si::f64::Pressure;

use crate::support::thermo::{PropertyError, ReferencePoint, SaturationProperties, State};

use super::ThermoModel;

/// Capability for looking up the saturation line by pressure.
pub trait HasSaturation: ThermoModel {
    /// Returns saturated liquid and vapor properties at `pressure`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if `pressure` is outside the
    /// range between the triple and critical points.
    fn saturation(&self, pressure: Pressure) -> Result<SaturationProperties, PropertyError>;
}

/// Capability for the fixed points that bound the vapor dome.
///
/// The points are constants of the model and are never computed by a state
/// query.
pub trait HasReferencePoints: ThermoModel {
    fn triple_point(&self) -> ReferencePoint;

    fn critical_point(&self) -> ReferencePoint;

    /// Returns the full state at the critical point.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the model cannot evaluate it.
    fn critical_state(&self) -> Result<State<Self::Fluid>, PropertyError>;
}
