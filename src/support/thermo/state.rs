use std::fmt;

use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::{
    thermo::Quality,
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

/// The thermodynamic state of a working fluid.
///
/// A `State<Fluid>` carries every property a steam cycle reports.
/// Property models return complete states, so a state never has to be
/// re-queried to learn its enthalpy or volume.
///
/// The `Fluid` type parameter is usually a marker such as
/// [`Water`](crate::support::thermo::fluid::Water).
///
/// # Example
///
/// ```
/// use twine_rankine::support::thermo::{Phase, Quality, State, fluid::Water};
/// use twine_rankine::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};
/// use uom::si::{
///     available_energy::kilojoule_per_kilogram,
///     f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
///     pressure::kilopascal,
///     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
///     specific_volume::cubic_meter_per_kilogram,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let state = State {
///     pressure: Pressure::new::<kilopascal>(10.0),
///     temperature: ThermodynamicTemperature::new::<degree_celsius>(45.8),
///     enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(191.8),
///     entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(0.649),
///     specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(0.00101),
///     internal_energy: SpecificInternalEnergy::new::<kilojoule_per_kilogram>(191.8),
///     quality: Some(Quality::saturated_liquid()),
///     phase: Phase::SaturatedLiquid,
///     fluid: Water,
/// };
///
/// assert!(state.is_saturated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
    pub specific_volume: SpecificVolume,
    pub internal_energy: SpecificInternalEnergy,

    /// Vapor mass fraction, present only for saturated states.
    pub quality: Option<Quality>,

    pub phase: Phase,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Returns `true` if the state lies on or inside the vapor dome.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        matches!(
            self.phase,
            Phase::SaturatedLiquid | Phase::TwoPhase | Phase::SaturatedVapor
        )
    }

    /// Returns a new state with the given fluid, keeping other fields unchanged.
    #[must_use]
    pub fn with_fluid<Other>(self, fluid: Other) -> State<Other> {
        State {
            pressure: self.pressure,
            temperature: self.temperature,
            enthalpy: self.enthalpy,
            entropy: self.entropy,
            specific_volume: self.specific_volume,
            internal_energy: self.internal_energy,
            quality: self.quality,
            phase: self.phase,
            fluid,
        }
    }
}

/// Phase region of a state, relative to the vapor dome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Compressed liquid below the saturation temperature.
    Subcooled,
    SaturatedLiquid,
    /// Liquid and vapor mixture, `0 < x < 1`.
    TwoPhase,
    SaturatedVapor,
    /// Vapor above the saturation temperature.
    Superheated,
    /// At or above the critical pressure, where no dome exists.
    Supercritical,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Subcooled => "Subcooled Liquid",
            Self::SaturatedLiquid => "Saturated Liquid",
            Self::TwoPhase => "Two-Phase Mixture",
            Self::SaturatedVapor => "Saturated Vapor",
            Self::Superheated => "Superheated Vapor",
            Self::Supercritical => "Supercritical Fluid",
        };
        f.write_str(name)
    }
}
