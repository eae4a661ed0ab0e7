use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

use super::PressureSide;

/// Errors that make a cycle specification unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// A boundary pressure is zero, negative, or NaN.
    #[error("{which} pressure is invalid")]
    Pressure {
        which: PressureSide,
        #[source]
        source: ConstraintError,
    },

    /// The high pressure is not above the low pressure.
    #[error("high pressure {p_high:?} must exceed low pressure {p_low:?}")]
    PressureOrder { p_low: Pressure, p_high: Pressure },

    /// A boundary pressure leaves the range where a vapor dome exists.
    #[error("{which} pressure {pressure:?} is outside ({min:?}, {max:?})")]
    OutsideSaturationRange {
        which: PressureSide,
        pressure: Pressure,
        /// Triple-point pressure of the property model.
        min: Pressure,
        /// Critical-point pressure of the property model.
        max: Pressure,
    },

    /// The turbine isentropic efficiency is outside `(0, 1]`.
    #[error("turbine efficiency is invalid")]
    TurbineEfficiency(#[source] ConstraintError),

    /// A superheated turbine inlet is colder than saturation at the high pressure.
    #[error(
        "turbine inlet temperature {temperature:?} is below saturation temperature {saturation:?}"
    )]
    BelowSaturation {
        temperature: ThermodynamicTemperature,
        saturation: ThermodynamicTemperature,
    },
}
