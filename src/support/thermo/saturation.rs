use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::{
    thermo::{Phase, Quality, State},
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

/// Saturated liquid and vapor properties along one isobar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationProperties {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub enthalpy_liquid: SpecificEnthalpy,
    pub enthalpy_vapor: SpecificEnthalpy,
    pub entropy_liquid: SpecificEntropy,
    pub entropy_vapor: SpecificEntropy,
    pub volume_liquid: SpecificVolume,
    pub volume_vapor: SpecificVolume,
    pub internal_energy_liquid: SpecificInternalEnergy,
    pub internal_energy_vapor: SpecificInternalEnergy,
}

impl SaturationProperties {
    /// Latent heat, `h_g − h_f`.
    #[must_use]
    pub fn enthalpy_of_vaporization(&self) -> SpecificEnthalpy {
        self.enthalpy_vapor - self.enthalpy_liquid
    }

    /// Entropy change across the dome, `s_g − s_f`.
    #[must_use]
    pub fn entropy_of_vaporization(&self) -> SpecificEntropy {
        self.entropy_vapor - self.entropy_liquid
    }

    /// Builds the saturated mixture state at `quality` by the lever rule.
    ///
    /// Endpoints are reported as [`Phase::SaturatedLiquid`] and
    /// [`Phase::SaturatedVapor`]; anything strictly between is
    /// [`Phase::TwoPhase`].
    #[must_use]
    pub fn mixture<Fluid>(&self, quality: Quality, fluid: Fluid) -> State<Fluid> {
        let x = quality.value();
        let phase = if x == 0.0 {
            Phase::SaturatedLiquid
        } else if x == 1.0 {
            Phase::SaturatedVapor
        } else {
            Phase::TwoPhase
        };

        State {
            pressure: self.pressure,
            temperature: self.temperature,
            enthalpy: self.enthalpy_liquid + (self.enthalpy_vapor - self.enthalpy_liquid) * x,
            entropy: self.entropy_liquid + (self.entropy_vapor - self.entropy_liquid) * x,
            specific_volume: self.volume_liquid + (self.volume_vapor - self.volume_liquid) * x,
            internal_energy: self.internal_energy_liquid
                + (self.internal_energy_vapor - self.internal_energy_liquid) * x,
            quality: Some(quality),
            phase,
            fluid,
        }
    }
}

/// A fixed point of the phase diagram, such as the triple or critical point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}
