use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::models::power::rankine::core::CycleError;

/// Sampling and tolerance settings for cycle process paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathConfig {
    /// Samples along the isentropic pump compression.
    pub compression_points: usize,

    /// Samples heating compressed liquid to saturation at the high pressure.
    pub preheat_points: usize,

    /// Samples across the evaporation plateau.
    pub evaporation_points: usize,

    /// Samples from saturated vapor to the turbine inlet temperature.
    pub superheat_points: usize,

    /// Samples along the turbine expansion.
    pub expansion_points: usize,

    /// Samples cooling a superheated turbine exhaust to saturation.
    pub desuperheat_points: usize,

    /// Minimum turbine inlet superheat for a superheating segment.
    pub superheat_tolerance: TemperatureInterval,

    /// Minimum turbine exhaust superheat for a desuperheating segment.
    ///
    /// Zero makes the check strict: any superheat at all draws the segment.
    pub exhaust_superheat_tolerance: TemperatureInterval,

    /// Minimum subcooling of the pump exit for a preheat leg.
    pub saturation_tolerance: TemperatureInterval,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            compression_points: 15,
            preheat_points: 20,
            evaporation_points: 20,
            superheat_points: 20,
            expansion_points: 20,
            desuperheat_points: 20,
            superheat_tolerance: TemperatureInterval::new::<delta_kelvin>(1.0),
            exhaust_superheat_tolerance: TemperatureInterval::new::<delta_kelvin>(0.0),
            saturation_tolerance: TemperatureInterval::new::<delta_kelvin>(1e-3),
        }
    }
}

impl PathConfig {
    /// Checks that every segment has at least its two endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidConfig`] if a sample count is below 2 or a
    /// tolerance is negative or NaN.
    pub fn validate(&self) -> Result<(), CycleError> {
        let counts = [
            ("compression_points", self.compression_points),
            ("preheat_points", self.preheat_points),
            ("evaporation_points", self.evaporation_points),
            ("superheat_points", self.superheat_points),
            ("expansion_points", self.expansion_points),
            ("desuperheat_points", self.desuperheat_points),
        ];
        for (name, count) in counts {
            if count < 2 {
                return Err(CycleError::invalid_config(format!(
                    "{name} must be at least 2, got {count}"
                )));
            }
        }

        let tolerances = [
            ("superheat_tolerance", self.superheat_tolerance),
            ("exhaust_superheat_tolerance", self.exhaust_superheat_tolerance),
            ("saturation_tolerance", self.saturation_tolerance),
        ];
        for (name, tolerance) in tolerances {
            let kelvin = tolerance.get::<delta_kelvin>();
            if !(kelvin.is_finite() && kelvin >= 0.0) {
                return Err(CycleError::invalid_config(format!(
                    "{name} must be a finite, non-negative interval, got {kelvin} K"
                )));
            }
        }

        Ok(())
    }
}
