//! Core Rankine cycle solver.

mod error;

pub use error::CycleError;

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Ratio, TemperatureInterval},
        pressure::kilopascal,
        ratio::percent,
        temperature_interval::kelvin as delta_kelvin,
    },
};

use crate::support::{
    thermo::{
        Quality, State,
        capability::{HasReferencePoints, HasSaturation, StateFrom},
    },
    units::{SpecificEnthalpy, TemperatureDifference},
};

use super::{CycleResult, CycleSpec, SpecError, TurbineInlet, traits::RankineThermoModel};

/// Inlet temperatures this close to saturation are treated as saturated vapor.
///
/// Must stay wider than a property model's own `(p, T)` saturation match.
const INLET_SATURATION_TOLERANCE_K: f64 = 1e-6;

/// Solves the four cycle states and the energy balance.
///
/// States are resolved strictly in flow order, each from the one before it:
/// `1 → 2s → 2`, then `3 → 4`.
///
/// # Errors
///
/// Returns [`CycleError`] if the specification lies outside the model's
/// saturation range, a property query fails, or the cycle adds no heat.
pub(super) fn solve<Fluid>(
    spec: &CycleSpec,
    thermo: &impl RankineThermoModel<Fluid>,
) -> Result<CycleResult<Fluid>, CycleError>
where
    Fluid: Clone + Default,
{
    check_saturation_range(spec, thermo)?;

    let p_low = spec.p_low();
    let p_high = spec.p_high();

    let state_1 = turbine_inlet(spec, thermo)?;

    let state_2s = query(
        thermo,
        (state_1.fluid.clone(), p_low, state_1.entropy),
        "isentropic turbine exit (p_low, s1)",
    )?;

    let state_2 = if spec.is_isentropic() {
        state_2s.clone()
    } else {
        let eta = spec.turbine_efficiency();
        let h_2 = state_1.enthalpy - (state_1.enthalpy - state_2s.enthalpy) * eta;
        query(
            thermo,
            (state_1.fluid.clone(), p_low, h_2),
            "turbine exit (p_low, h2)",
        )?
    };

    let state_3 = query(
        thermo,
        (state_1.fluid.clone(), p_low, Quality::saturated_liquid()),
        "pump inlet (p_low, x = 0)",
    )?;

    let state_4 = query(
        thermo,
        (state_3.fluid.clone(), p_high, state_3.entropy),
        "pump exit (p_high, s3)",
    )?;

    let turbine_work = state_1.enthalpy - state_2.enthalpy;
    let pump_work = state_4.enthalpy - state_3.enthalpy;
    let heat_added = state_1.enthalpy - state_4.enthalpy;

    if heat_added == SpecificEnthalpy::ZERO || !heat_added.is_finite() {
        return Err(CycleError::DegenerateCycle { heat_added });
    }

    let efficiency: Ratio = (turbine_work - pump_work) / heat_added;

    debug!(
        name = spec.name(),
        p_low_kpa = p_low.get::<kilopascal>(),
        p_high_kpa = p_high.get::<kilopascal>(),
        turbine_efficiency = spec.turbine_efficiency(),
        efficiency_pct = efficiency.get::<percent>(),
        "solved rankine cycle"
    );

    Ok(CycleResult {
        state_1,
        state_2s,
        state_2,
        state_3,
        state_4,
        turbine_work,
        pump_work,
        heat_added,
        efficiency,
        turbine_efficiency: spec.turbine_efficiency(),
        unit_system: spec.unit_system(),
        name: spec.name().to_string(),
    })
}

/// Queries a state, attaching `context` to any model failure.
pub(super) fn query<M, Input>(
    thermo: &M,
    input: Input,
    context: impl Into<String>,
) -> Result<State<M::Fluid>, CycleError>
where
    M: StateFrom<Input>,
{
    thermo
        .state_from(input)
        .map_err(|err| CycleError::thermo_failed(context, err))
}

/// Both pressures must sit strictly between the triple and critical points.
///
/// Reference points are model constants, so this check issues no state query.
fn check_saturation_range(
    spec: &CycleSpec,
    thermo: &impl HasReferencePoints,
) -> Result<(), SpecError> {
    spec.check_saturation_range(
        thermo.triple_point().pressure,
        thermo.critical_point().pressure,
    )
}

fn turbine_inlet<Fluid>(
    spec: &CycleSpec,
    thermo: &impl RankineThermoModel<Fluid>,
) -> Result<State<Fluid>, CycleError>
where
    Fluid: Clone + Default,
{
    let p_high = spec.p_high();
    let saturated_vapor = || {
        query(
            thermo,
            (Fluid::default(), p_high, Quality::saturated_vapor()),
            "turbine inlet (p_high, x = 1)",
        )
    };

    match spec.turbine_inlet() {
        TurbineInlet::SaturatedVapor => saturated_vapor(),
        TurbineInlet::Superheated(temperature) => {
            let saturation = thermo
                .saturation(p_high)
                .map_err(|err| CycleError::thermo_failed("saturation at p_high", err))?
                .temperature;

            let tolerance = TemperatureInterval::new::<delta_kelvin>(INLET_SATURATION_TOLERANCE_K);
            let superheat = temperature.minus(saturation);

            if superheat < -tolerance {
                return Err(SpecError::BelowSaturation {
                    temperature,
                    saturation,
                }
                .into());
            }

            // (p, T) does not fix a state on the saturation line.
            if superheat <= tolerance {
                return saturated_vapor();
            }

            query(
                thermo,
                (Fluid::default(), p_high, temperature),
                "turbine inlet (p_high, T1)",
            )
        }
    }
}
