//! Process paths for drawing a solved cycle on any property diagram.
//!
//! The upper curve traces the high-pressure side from the pump inlet through
//! the boiler and down the turbine. The lower curve traces heat rejection in
//! the condenser. Segments are spliced end to end, so a joint may appear at
//! the end of one segment and the start of the next.

mod config;

pub use config::PathConfig;

use std::ops::{Add, Mul, Range, Sub};

use tracing::{debug, trace, warn};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::kilopascal,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{
    thermo::{Curve, Quality, SaturationProperties, State, capability::HasSaturation},
    units::TemperatureDifference,
};

use super::{
    CycleError, CycleResult, CycleSpec, TurbineInlet, solve::query, traits::RankineThermoModel,
};

/// Thermodynamic process traced by one path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Process {
    /// Pump compression, then heating of the compressed liquid to saturation.
    Feed,
    /// Boiling at the high pressure.
    Evaporation,
    /// Heating saturated vapor to the turbine inlet temperature.
    Superheating,
    /// Turbine expansion, drawn as a straight line in pressure and entropy.
    Expansion,
    /// Cooling a superheated turbine exhaust to saturation.
    Desuperheating,
    /// Condensing at the low pressure.
    Condensation,
}

/// A contiguous run of states in a curve that belongs to one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub process: Process,
    /// Indices of the segment's states within its curve.
    pub range: Range<usize>,
}

/// Upper and lower process curves of a solved cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclePaths<Fluid> {
    /// Pump inlet to turbine exit.
    pub upper: Curve<Fluid>,
    /// Turbine exit to pump inlet.
    pub lower: Curve<Fluid>,
    pub upper_segments: Vec<Segment>,
    pub lower_segments: Vec<Segment>,
}

impl<Fluid> CyclePaths<Fluid> {
    /// Returns the states of the segment tracing `process`, if it was drawn.
    #[must_use]
    pub fn segment(&self, process: Process) -> Option<&[State<Fluid>]> {
        find_segment(&self.upper_segments, &self.upper, process)
            .or_else(|| find_segment(&self.lower_segments, &self.lower, process))
    }
}

fn find_segment<'a, Fluid>(
    segments: &[Segment],
    curve: &'a Curve<Fluid>,
    process: Process,
) -> Option<&'a [State<Fluid>]> {
    segments
        .iter()
        .find(|segment| segment.process == process)
        .map(|segment| &curve.states()[segment.range.clone()])
}

/// Builds the upper and lower process curves of a solved cycle.
///
/// # Errors
///
/// Returns [`CycleError::InvalidConfig`] before any query if `config` is
/// invalid, and [`CycleError::PropertyLookup`] if any sample fails.
pub(super) fn build_paths<Fluid>(
    spec: &CycleSpec,
    result: &CycleResult<Fluid>,
    thermo: &impl RankineThermoModel<Fluid>,
    config: &PathConfig,
) -> Result<CyclePaths<Fluid>, CycleError>
where
    Fluid: Clone,
{
    config.validate()?;

    let sat_low = saturation(thermo, spec.p_low(), "saturation at p_low")?;
    let sat_high = saturation(thermo, spec.p_high(), "saturation at p_high")?;

    let mut upper = SegmentedCurve::new();
    upper.push(Process::Feed, feed(spec, result, thermo, config, &sat_high)?);
    upper.push(
        Process::Evaporation,
        evaporation(spec, result, thermo, config)?,
    );
    if let Some(states) = superheating(spec, result, thermo, config, &sat_high)? {
        upper.push(Process::Superheating, states);
    }
    upper.push(Process::Expansion, expansion(result, thermo, config)?);

    let mut lower = SegmentedCurve::new();
    if let Some(states) = desuperheating(spec, result, thermo, config, &sat_low)? {
        lower.push(Process::Desuperheating, states);
    }
    lower.push(
        Process::Condensation,
        condensation(spec, result, thermo, upper.curve.len())?,
    );

    debug!(
        upper_points = upper.curve.len(),
        lower_points = lower.curve.len(),
        upper_segments = upper.segments.len(),
        lower_segments = lower.segments.len(),
        "built rankine cycle paths"
    );

    Ok(CyclePaths {
        upper: upper.curve,
        lower: lower.curve,
        upper_segments: upper.segments,
        lower_segments: lower.segments,
    })
}

struct SegmentedCurve<Fluid> {
    curve: Curve<Fluid>,
    segments: Vec<Segment>,
}

impl<Fluid> SegmentedCurve<Fluid> {
    fn new() -> Self {
        Self {
            curve: Curve::new(),
            segments: Vec::new(),
        }
    }

    fn push(&mut self, process: Process, states: Vec<State<Fluid>>) {
        let start = self.curve.len();
        self.curve.extend(states);
        trace!(?process, points = self.curve.len() - start, "path segment included");
        self.segments.push(Segment {
            process,
            range: start..self.curve.len(),
        });
    }
}

/// Compressed liquid from the pump inlet to saturated liquid at `p_high`.
///
/// The pump leg steps pressure at constant entropy. The preheat leg then steps
/// temperature at `p_high` and ends exactly on the saturated liquid state.
fn feed<Fluid: Clone>(
    spec: &CycleSpec,
    result: &CycleResult<Fluid>,
    thermo: &impl RankineThermoModel<Fluid>,
    config: &PathConfig,
    sat_high: &SaturationProperties,
) -> Result<Vec<State<Fluid>>, CycleError> {
    let fluid = &result.state_3.fluid;
    let s_3 = result.state_3.entropy;
    let count = config.compression_points;

    let mut states = Vec::with_capacity(count + config.preheat_points);
    for n in 0..count {
        let p = lerp(spec.p_low(), spec.p_high(), fraction(n, count));
        states.push(query(
            thermo,
            (fluid.clone(), p, s_3),
            format!("feed compression sample {n} at {:.3} kPa", p.get::<kilopascal>()),
        )?);
    }

    let Some(t_pumped) = states.last().map(|state| state.temperature) else {
        return Ok(states);
    };
    let subcooling = sat_high.temperature.minus(t_pumped);
    if subcooling <= config.saturation_tolerance {
        trace!(
            subcooling_k = subcooling.get::<delta_kelvin>(),
            "preheat leg skipped"
        );
        return Ok(states);
    }

    let count = config.preheat_points;
    for n in 1..count {
        let state = if n + 1 == count {
            query(
                thermo,
                (fluid.clone(), spec.p_high(), Quality::saturated_liquid()),
                "feed preheat end (p_high, x = 0)",
            )?
        } else {
            let t = lerp_temperature(t_pumped, sat_high.temperature, fraction(n, count));
            query(
                thermo,
                (fluid.clone(), spec.p_high(), t),
                format!("feed preheat sample {n}"),
            )?
        };
        states.push(state);
    }

    Ok(states)
}

fn evaporation<Fluid: Clone>(
    spec: &CycleSpec,
    result: &CycleResult<Fluid>,
    thermo: &impl RankineThermoModel<Fluid>,
    config: &PathConfig,
) -> Result<Vec<State<Fluid>>, CycleError> {
    let count = config.evaporation_points;
    (0..count)
        .map(|n| {
            let x = quality(fraction(n, count))?;
            query(
                thermo,
                (result.state_1.fluid.clone(), spec.p_high(), x),
                format!("evaporation sample {n} at x = {:.4}", x.value()),
            )
        })
        .collect()
}

/// Saturated vapor to the turbine inlet, if the inlet is meaningfully superheated.
fn superheating<Fluid: Clone>(
    spec: &CycleSpec,
    result: &CycleResult<Fluid>,
    thermo: &impl RankineThermoModel<Fluid>,
    config: &PathConfig,
    sat_high: &SaturationProperties,
) -> Result<Option<Vec<State<Fluid>>>, CycleError> {
    let t_1 = result.state_1.temperature;
    let superheat = t_1.minus(sat_high.temperature);

    if superheat <= config.superheat_tolerance {
        if matches!(spec.turbine_inlet(), TurbineInlet::Superheated(_)) {
            warn!(
                superheat_k = superheat.get::<delta_kelvin>(),
                tolerance_k = config.superheat_tolerance.get::<delta_kelvin>(),
                "superheated turbine inlet is within tolerance of saturation; \
                 superheating segment dropped"
            );
        } else {
            trace!("superheating segment skipped for saturated inlet");
        }
        return Ok(None);
    }

    let fluid = &result.state_1.fluid;
    let count = config.superheat_points;
    let mut states = Vec::with_capacity(count);
    states.push(query(
        thermo,
        (fluid.clone(), spec.p_high(), Quality::saturated_vapor()),
        "superheating start (p_high, x = 1)",
    )?);
    for n in 1..count {
        let t = lerp_temperature(sat_high.temperature, t_1, fraction(n, count));
        states.push(query(
            thermo,
            (fluid.clone(), spec.p_high(), t),
            format!("superheating sample {n}"),
        )?);
    }

    Ok(Some(states))
}

/// Straight line in pressure and entropy from state 1 to state 2.
fn expansion<Fluid: Clone>(
    result: &CycleResult<Fluid>,
    thermo: &impl RankineThermoModel<Fluid>,
    config: &PathConfig,
) -> Result<Vec<State<Fluid>>, CycleError> {
    let (start, end) = (&result.state_1, &result.state_2);
    let count = config.expansion_points;
    (0..count)
        .map(|n| {
            let z = fraction(n, count);
            query(
                thermo,
                (
                    start.fluid.clone(),
                    lerp(start.pressure, end.pressure, z),
                    lerp(start.entropy, end.entropy, z),
                ),
                format!("expansion sample {n}"),
            )
        })
        .collect()
}

/// State 2 cooled toward saturation at `p_low`, if the exhaust is superheated.
///
/// Every sample stays strictly above the saturation temperature.
fn desuperheating<Fluid: Clone>(
    spec: &CycleSpec,
    result: &CycleResult<Fluid>,
    thermo: &impl RankineThermoModel<Fluid>,
    config: &PathConfig,
    sat_low: &SaturationProperties,
) -> Result<Option<Vec<State<Fluid>>>, CycleError> {
    let state_2 = &result.state_2;
    let superheat = state_2.temperature.minus(sat_low.temperature);

    if superheat <= config.exhaust_superheat_tolerance {
        trace!(
            superheat_k = superheat.get::<delta_kelvin>(),
            "desuperheating segment skipped"
        );
        return Ok(None);
    }

    let count = config.desuperheat_points;
    #[allow(clippy::cast_precision_loss)]
    let step = superheat / count as f64;

    let mut states = Vec::with_capacity(count);
    states.push(state_2.clone());
    for n in 1..count {
        #[allow(clippy::cast_precision_loss)]
        let t = state_2.temperature - step * n as f64;
        states.push(query(
            thermo,
            (state_2.fluid.clone(), spec.p_low(), t),
            format!("desuperheating sample {n}"),
        )?);
    }

    Ok(Some(states))
}

/// Condensation from the exhaust quality down to saturated liquid.
///
/// A single-phase exhaust starts condensing from saturated vapor.
fn condensation<Fluid: Clone>(
    spec: &CycleSpec,
    result: &CycleResult<Fluid>,
    thermo: &impl RankineThermoModel<Fluid>,
    count: usize,
) -> Result<Vec<State<Fluid>>, CycleError> {
    let x_2 = result.state_2.quality.map_or(1.0, Quality::value);
    (0..count)
        .map(|n| {
            let x = quality((1.0 - fraction(n, count)) * x_2)?;
            query(
                thermo,
                (result.state_2.fluid.clone(), spec.p_low(), x),
                format!("condensation sample {n} at x = {:.4}", x.value()),
            )
        })
        .collect()
}

fn saturation<M: HasSaturation>(
    thermo: &M,
    pressure: Pressure,
    context: &str,
) -> Result<SaturationProperties, CycleError> {
    thermo
        .saturation(pressure)
        .map_err(|err| CycleError::thermo_failed(context, err))
}

fn quality(x: f64) -> Result<Quality, CycleError> {
    Quality::new(x).map_err(|err| CycleError::thermo_failed(format!("vapor quality {x}"), err))
}

/// Position of sample `n` in a segment of `count` samples.
///
/// Zero at the first sample and exactly one at the last.
#[allow(clippy::cast_precision_loss)]
fn fraction(n: usize, count: usize) -> f64 {
    if n + 1 >= count {
        1.0
    } else {
        n as f64 / (count - 1) as f64
    }
}

/// Linear interpolation that lands exactly on `end` when `z` is one.
fn lerp<Q>(start: Q, end: Q, z: f64) -> Q
where
    Q: Copy + Add<Output = Q> + Sub<Output = Q> + Mul<f64, Output = Q>,
{
    if z >= 1.0 {
        end
    } else {
        start + (end - start) * z
    }
}

fn lerp_temperature(
    start: ThermodynamicTemperature,
    end: ThermodynamicTemperature,
    z: f64,
) -> ThermodynamicTemperature {
    if z >= 1.0 {
        end
    } else {
        start + end.minus(start) * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, f64::TemperatureInterval,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin, thermodynamic_temperature::kelvin,
    };

    use crate::models::power::rankine::core::{
        solve::solve,
        test_support::{Fault, FaultySteam, IdealSteam, TestFluid, kpa},
    };
    use crate::support::thermo::{Phase, Property};

    fn solved(inlet: TurbineInlet, eta: f64) -> (CycleSpec, CycleResult<TestFluid>) {
        let spec = CycleSpec::new(kpa(10.0), kpa(8000.0), inlet, eta).unwrap();
        let result = solve(&spec, &IdealSteam::new()).unwrap();
        (spec, result)
    }

    fn superheated_to(kelvin_value: f64) -> TurbineInlet {
        TurbineInlet::Superheated(ThermodynamicTemperature::new::<kelvin>(kelvin_value))
    }

    fn processes(segments: &[Segment]) -> Vec<Process> {
        segments.iter().map(|segment| segment.process).collect()
    }

    fn assert_same_state(a: &State<TestFluid>, b: &State<TestFluid>) {
        for property in Property::ALL {
            assert_relative_eq!(
                property.value(a),
                property.value(b),
                max_relative = 1e-9,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn saturated_inlet_has_no_superheating() {
        let (spec, result) = solved(TurbineInlet::SaturatedVapor, 1.0);
        let config = PathConfig::default();
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &config).unwrap();

        assert_eq!(
            processes(&paths.upper_segments),
            [Process::Feed, Process::Evaporation, Process::Expansion]
        );
        assert_eq!(processes(&paths.lower_segments), [Process::Condensation]);
        assert!(paths.segment(Process::Superheating).is_none());

        // Pump leg plus a preheat leg that shares its first point with the pump leg.
        let feed_len = config.compression_points + config.preheat_points - 1;
        assert_eq!(paths.segment(Process::Feed).unwrap().len(), feed_len);
        assert_eq!(
            paths.upper.len(),
            feed_len + config.evaporation_points + config.expansion_points
        );
        assert_eq!(paths.lower.len(), paths.upper.len());
    }

    #[test]
    fn superheated_cycle_draws_every_segment() {
        let (spec, result) = solved(superheated_to(700.0), 0.85);
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &PathConfig::default())
            .unwrap();

        assert_eq!(result.state_2.phase, Phase::Superheated);
        assert_eq!(
            processes(&paths.upper_segments),
            [
                Process::Feed,
                Process::Evaporation,
                Process::Superheating,
                Process::Expansion
            ]
        );
        assert_eq!(
            processes(&paths.lower_segments),
            [Process::Desuperheating, Process::Condensation]
        );

        let condensation = paths.segment(Process::Condensation).unwrap();
        assert_eq!(condensation[0].phase, Phase::SaturatedVapor);
    }

    #[test]
    fn segment_ranges_tile_each_curve() {
        let (spec, result) = solved(superheated_to(700.0), 0.85);
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &PathConfig::default())
            .unwrap();

        for (segments, curve) in [
            (&paths.upper_segments, &paths.upper),
            (&paths.lower_segments, &paths.lower),
        ] {
            let mut next = 0;
            for segment in segments {
                assert_eq!(segment.range.start, next);
                assert!(segment.range.len() >= 2);
                next = segment.range.end;
            }
            assert_eq!(next, curve.len());
        }
    }

    #[test]
    fn curves_close_on_cycle_states() {
        for (inlet, eta) in [
            (TurbineInlet::SaturatedVapor, 1.0),
            (TurbineInlet::SaturatedVapor, 0.85),
            (superheated_to(700.0), 1.0),
            (superheated_to(700.0), 0.85),
        ] {
            let (spec, result) = solved(inlet, eta);
            let paths = build_paths(&spec, &result, &IdealSteam::new(), &PathConfig::default())
                .unwrap();

            assert_same_state(paths.upper.first().unwrap(), &result.state_3);
            assert_same_state(paths.upper.last().unwrap(), &result.state_2);
            assert_same_state(paths.lower.first().unwrap(), &result.state_2);
            assert_eq!(paths.lower.last(), Some(&result.state_3));

            let expansion = paths.segment(Process::Expansion).unwrap();
            assert_same_state(&expansion[0], &result.state_1);
        }
    }

    #[test]
    fn joints_are_shared_states() {
        let (spec, result) = solved(superheated_to(700.0), 0.85);
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &PathConfig::default())
            .unwrap();

        let feed = paths.segment(Process::Feed).unwrap();
        let evaporation = paths.segment(Process::Evaporation).unwrap();
        let superheating = paths.segment(Process::Superheating).unwrap();
        let expansion = paths.segment(Process::Expansion).unwrap();

        assert_eq!(feed.last(), evaporation.first());
        assert_eq!(feed.last().unwrap().phase, Phase::SaturatedLiquid);
        assert_eq!(evaporation.last(), superheating.first());
        assert_same_state(superheating.last().unwrap(), &expansion[0]);
    }

    #[test]
    fn feed_heats_monotonically_to_saturation() {
        let (spec, result) = solved(TurbineInlet::SaturatedVapor, 1.0);
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &PathConfig::default())
            .unwrap();
        let feed = paths.segment(Process::Feed).unwrap();

        for pair in feed.windows(2) {
            let rise = pair[1].temperature.get::<kelvin>() - pair[0].temperature.get::<kelvin>();
            assert!(rise > -1e-9, "temperature dropped by {rise} K");
            assert!(pair[1].pressure >= pair[0].pressure);
        }
        assert_same_state(&feed[PathConfig::default().compression_points - 1], &result.state_4);
        assert!(
            feed[..feed.len() - 1]
                .iter()
                .skip(1)
                .all(|state| state.phase == Phase::Subcooled)
        );
    }

    #[test]
    fn preheat_leg_is_skipped_within_tolerance() {
        let (spec, result) = solved(TurbineInlet::SaturatedVapor, 1.0);
        let config = PathConfig {
            saturation_tolerance: TemperatureInterval::new::<delta_kelvin>(1000.0),
            ..PathConfig::default()
        };
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &config).unwrap();

        let feed = paths.segment(Process::Feed).unwrap();
        assert_eq!(feed.len(), config.compression_points);
    }

    #[test]
    fn desuperheating_stays_above_saturation() {
        let (spec, result) = solved(superheated_to(700.0), 0.85);
        let model = IdealSteam::new();
        let paths = build_paths(&spec, &result, &model, &PathConfig::default()).unwrap();
        let t_sat = model.saturation(spec.p_low()).unwrap().temperature;

        let segment = paths.segment(Process::Desuperheating).unwrap();
        assert_eq!(segment[0], result.state_2);
        for pair in segment.windows(2) {
            assert!(pair[1].temperature < pair[0].temperature);
        }
        assert!(segment.iter().all(|state| state.temperature > t_sat));
        assert!(segment.iter().all(|state| state.phase == Phase::Superheated));
    }

    #[test]
    fn marginal_superheat_is_drawn_as_saturated() {
        let model = IdealSteam::new();
        let t_sat = model.saturation(kpa(8000.0)).unwrap().temperature;
        let margin = TemperatureInterval::new::<delta_kelvin>(0.5);
        let inlet = TurbineInlet::Superheated(t_sat + margin);
        let (spec, result) = solved(inlet, 1.0);
        let paths = build_paths(&spec, &result, &model, &PathConfig::default()).unwrap();

        assert_eq!(result.state_1.phase, Phase::Superheated);
        assert!(paths.segment(Process::Superheating).is_none());
    }

    #[test]
    fn two_phase_exhaust_condenses_from_its_quality() {
        let (spec, result) = solved(TurbineInlet::SaturatedVapor, 1.0);
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &PathConfig::default())
            .unwrap();

        let x_2 = result.state_2.quality.unwrap().value();
        let qualities: Vec<f64> = paths
            .lower
            .iter()
            .map(|state| state.quality.unwrap().value())
            .collect();

        assert_relative_eq!(qualities[0], x_2);
        assert_eq!(*qualities.last().unwrap(), 0.0);
        assert!(qualities.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn evaporation_runs_liquid_to_vapor_at_constant_temperature() {
        let (spec, result) = solved(TurbineInlet::SaturatedVapor, 1.0);
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &PathConfig::default())
            .unwrap();
        let evaporation = paths.segment(Process::Evaporation).unwrap();

        let temperatures: Vec<f64> = evaporation
            .iter()
            .map(|state| Property::Temperature.value(state))
            .collect();
        assert!(temperatures.iter().all(|t| (t - temperatures[0]).abs() < 1e-9));

        let entropy = |state: &State<TestFluid>| {
            state.entropy.get::<kilojoule_per_kilogram_kelvin>()
        };
        assert!(evaporation.windows(2).all(|pair| entropy(&pair[1]) > entropy(&pair[0])));
        assert_relative_eq!(
            evaporation.last().unwrap().enthalpy.get::<kilojoule_per_kilogram>(),
            result.state_1.enthalpy.get::<kilojoule_per_kilogram>()
        );
    }

    #[test]
    fn failed_sample_aborts_the_build() {
        let (spec, result) = solved(TurbineInlet::SaturatedVapor, 0.85);
        let config = PathConfig::default();

        // Two saturation lookups, the pump leg, then three preheat samples.
        let answered = 2 + config.compression_points + 3;
        let model = FaultySteam::new(Fault::RejectAfter(answered));

        match build_paths(&spec, &result, &model, &config) {
            Err(CycleError::PropertyLookup { context, .. }) => {
                assert_eq!(context, "feed preheat sample 4");
            }
            other => panic!("expected PropertyLookup, got {other:?}"),
        }
        assert_eq!(model.query_count(), answered);
    }

    #[test]
    fn failed_condensation_sample_aborts_the_build() {
        let (spec, result) = solved(TurbineInlet::SaturatedVapor, 1.0);
        let config = PathConfig::default();
        let paths = build_paths(&spec, &result, &IdealSteam::new(), &config).unwrap();

        // Everything but the last condensation sample.
        let answered = 2 + paths.upper.len() + paths.lower.len() - 1;
        let model = FaultySteam::new(Fault::RejectAfter(answered));

        let outcome = build_paths(&spec, &result, &model, &config);
        assert!(matches!(outcome, Err(CycleError::PropertyLookup { .. })));
    }

    #[test]
    fn invalid_config_is_rejected_before_any_query() {
        let (spec, result) = solved(TurbineInlet::SaturatedVapor, 1.0);
        let model = IdealSteam::new();
        let config = PathConfig {
            expansion_points: 0,
            ..PathConfig::default()
        };

        let outcome = build_paths(&spec, &result, &model, &config);
        assert!(matches!(outcome, Err(CycleError::InvalidConfig { .. })));
        assert_eq!(model.query_count(), 0);
    }

    #[test]
    fn fraction_hits_both_ends() {
        assert_eq!(fraction(0, 5), 0.0);
        assert_eq!(fraction(2, 5), 0.5);
        assert_eq!(fraction(4, 5), 1.0);
        assert_eq!(lerp(kpa(10.0), kpa(8000.0), 1.0), kpa(8000.0));
        assert_eq!(lerp(kpa(10.0), kpa(8000.0), 0.0), kpa(10.0));
    }
}
