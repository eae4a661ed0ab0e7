//! Property model bounds for the Rankine core.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    thermo::{
        Quality,
        capability::{HasReferencePoints, HasSaturation, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Required thermo model bounds for solving and drawing a Rankine cycle.
///
/// Implemented automatically for any model with the listed capabilities.
pub trait RankineThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasSaturation
    + HasReferencePoints
    + StateFrom<(Fluid, Pressure, ThermodynamicTemperature)>
    + StateFrom<(Fluid, Pressure, Quality)>
    + StateFrom<(Fluid, Pressure, SpecificEntropy)>
    + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
{
}

impl<Fluid, T> RankineThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasSaturation
        + HasReferencePoints
        + StateFrom<(Fluid, Pressure, ThermodynamicTemperature)>
        + StateFrom<(Fluid, Pressure, Quality)>
        + StateFrom<(Fluid, Pressure, SpecificEntropy)>
        + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
{
}
