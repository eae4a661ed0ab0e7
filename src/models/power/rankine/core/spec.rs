//! Cycle specification.

mod error;

use std::fmt;

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, StrictlyPositive, UnitIntervalLowerOpen};

pub use error::SpecError;

const DEFAULT_NAME: &str = "Rankine Cycle";

/// Condition of the working fluid entering the turbine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurbineInlet {
    /// Saturated vapor (`x = 1`) at the high pressure.
    SaturatedVapor,

    /// Superheated vapor at this temperature and the high pressure.
    Superheated(ThermodynamicTemperature),
}

/// Unit system a presentation layer should display results in.
///
/// The solver never consults it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    #[default]
    Si,
    English,
}

/// Identifies one of the two cycle pressures in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureSide {
    /// Condenser pressure.
    Low,
    /// Boiler pressure.
    High,
}

impl fmt::Display for PressureSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::High => "high",
        })
    }
}

/// The inputs that define an ideal-pump Rankine cycle.
///
/// A `CycleSpec` is validated on construction and immutable afterwards.
/// Validation covers only what is knowable without a property model: positive
/// pressures in the right order and an efficiency in `(0, 1]`. The solver
/// checks the pressures against the model's saturation range.
///
/// # Example
///
/// ```
/// use twine_rankine::models::power::rankine::{CycleSpec, TurbineInlet, UnitSystem};
/// use uom::si::{f64::{Pressure, ThermodynamicTemperature}, pressure::kilopascal};
/// use uom::si::thermodynamic_temperature::degree_celsius;
///
/// let spec = CycleSpec::new(
///     Pressure::new::<kilopascal>(10.0),
///     Pressure::new::<kilopascal>(8000.0),
///     TurbineInlet::Superheated(ThermodynamicTemperature::new::<degree_celsius>(500.0)),
///     0.85,
/// )
/// .unwrap()
/// .with_name("Plant A");
///
/// assert_eq!(spec.name(), "Plant A");
/// assert_eq!(spec.unit_system(), UnitSystem::Si);
///
/// let reversed = CycleSpec::new(
///     Pressure::new::<kilopascal>(8000.0),
///     Pressure::new::<kilopascal>(10.0),
///     TurbineInlet::SaturatedVapor,
///     1.0,
/// );
/// assert!(reversed.is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CycleSpec {
    p_low: Pressure,
    p_high: Pressure,
    turbine_inlet: TurbineInlet,
    turbine_efficiency: Constrained<f64, UnitIntervalLowerOpen>,
    unit_system: UnitSystem,
    name: String,
}

impl CycleSpec {
    /// Creates a validated cycle specification.
    ///
    /// The name defaults to `"Rankine Cycle"` and the unit system to SI.
    ///
    /// # Errors
    ///
    /// - [`SpecError::Pressure`] if either pressure is not strictly positive.
    /// - [`SpecError::PressureOrder`] if `p_high <= p_low`.
    /// - [`SpecError::TurbineEfficiency`] if the efficiency is outside `(0, 1]`.
    pub fn new(
        p_low: Pressure,
        p_high: Pressure,
        turbine_inlet: TurbineInlet,
        turbine_efficiency: f64,
    ) -> Result<Self, SpecError> {
        let p_low = StrictlyPositive::new(p_low)
            .map_err(|source| SpecError::Pressure {
                which: PressureSide::Low,
                source,
            })?
            .into_inner();
        let p_high = StrictlyPositive::new(p_high)
            .map_err(|source| SpecError::Pressure {
                which: PressureSide::High,
                source,
            })?
            .into_inner();

        if p_high <= p_low {
            return Err(SpecError::PressureOrder { p_low, p_high });
        }

        let turbine_efficiency =
            UnitIntervalLowerOpen::new(turbine_efficiency).map_err(SpecError::TurbineEfficiency)?;

        Ok(Self {
            p_low,
            p_high,
            turbine_inlet,
            turbine_efficiency,
            unit_system: UnitSystem::default(),
            name: DEFAULT_NAME.to_string(),
        })
    }

    /// Returns a copy with the given display unit system.
    #[must_use]
    pub fn with_unit_system(self, unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            ..self
        }
    }

    /// Returns a copy with the given name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Condenser pressure.
    #[must_use]
    pub fn p_low(&self) -> Pressure {
        self.p_low
    }

    /// Boiler pressure.
    #[must_use]
    pub fn p_high(&self) -> Pressure {
        self.p_high
    }

    #[must_use]
    pub fn turbine_inlet(&self) -> TurbineInlet {
        self.turbine_inlet
    }

    /// Turbine isentropic efficiency, in `(0, 1]`.
    #[must_use]
    pub fn turbine_efficiency(&self) -> f64 {
        self.turbine_efficiency.into_inner()
    }

    /// Returns `true` for an isentropic turbine.
    #[must_use]
    pub fn is_isentropic(&self) -> bool {
        self.turbine_efficiency() == 1.0
    }

    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks that both pressures lie strictly between `min` and `max`.
    pub(super) fn check_saturation_range(
        &self,
        min: Pressure,
        max: Pressure,
    ) -> Result<(), SpecError> {
        let sides = [
            (PressureSide::Low, self.p_low),
            (PressureSide::High, self.p_high),
        ];
        for (which, pressure) in sides {
            if !(pressure > min && pressure < max) {
                return Err(SpecError::OutsideSaturationRange {
                    which,
                    pressure,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}
