//! Simple Rankine power cycle with an ideal pump and an irreversible turbine.
//!
//! Steam leaves the boiler at the high pressure, expands through the turbine,
//! condenses to saturated liquid at the low pressure, and is pumped back to
//! the boiler. The solver resolves the four states in flow order and the path
//! builder samples each process so the cycle can be drawn on any
//! two-property diagram.
//!
//! All property lookups go through a [`RankineThermoModel`]. The core never
//! computes fluid properties itself.

mod paths;
mod results;
mod solve;
mod spec;
mod traits;
mod vapor_dome;

#[cfg(test)]
mod test_support;

pub use paths::{CyclePaths, PathConfig, Process, Segment};
pub use results::{CycleDiagram, CycleResult};
pub use solve::CycleError;
pub use spec::{CycleSpec, PressureSide, SpecError, TurbineInlet, UnitSystem};
pub use traits::RankineThermoModel;
pub use vapor_dome::{DEFAULT_VAPOR_DOME_POINTS, VaporDome, VaporDomeError};

use uom::si::f64::Pressure;

use crate::support::thermo::{
    Quality,
    capability::{HasReferencePoints, StateFrom},
};

use paths::build_paths;
use solve::solve;
use vapor_dome::vapor_dome;

/// Entry point for solving and drawing a Rankine cycle.
pub struct RankineCycle;

impl RankineCycle {
    /// Solves the cycle states and energy balance.
    ///
    /// # Errors
    ///
    /// Returns a [`CycleError`] if the specification lies outside the model's
    /// saturation range, the turbine inlet is below saturation, a property
    /// query fails, or the cycle adds no heat.
    pub fn solve<Fluid>(
        spec: &CycleSpec,
        thermo: &impl RankineThermoModel<Fluid>,
    ) -> Result<CycleResult<Fluid>, CycleError>
    where
        Fluid: Clone + Default,
    {
        solve(spec, thermo)
    }

    /// Builds the upper and lower process curves of a solved cycle.
    ///
    /// `result` must come from solving `spec` with the same `thermo`.
    ///
    /// # Errors
    ///
    /// Returns a [`CycleError`] if `config` is invalid or a sample query fails.
    pub fn build_paths<Fluid>(
        spec: &CycleSpec,
        result: &CycleResult<Fluid>,
        thermo: &impl RankineThermoModel<Fluid>,
        config: &PathConfig,
    ) -> Result<CyclePaths<Fluid>, CycleError>
    where
        Fluid: Clone,
    {
        build_paths(spec, result, thermo, config)
    }

    /// Solves the cycle and builds its paths as one operation.
    ///
    /// # Errors
    ///
    /// Returns the first [`CycleError`] from either step.
    pub fn solve_with_paths<Fluid>(
        spec: &CycleSpec,
        thermo: &impl RankineThermoModel<Fluid>,
        config: &PathConfig,
    ) -> Result<CycleDiagram<Fluid>, CycleError>
    where
        Fluid: Clone + Default,
    {
        config.validate()?;
        let result = solve(spec, thermo)?;
        let paths = build_paths(spec, &result, thermo, config)?;
        Ok(CycleDiagram { result, paths })
    }

    /// Samples the saturated liquid and vapor lines on `point_count` isobars.
    ///
    /// See [`DEFAULT_VAPOR_DOME_POINTS`] for the usual resolution.
    ///
    /// # Errors
    ///
    /// Returns a [`VaporDomeError`] if `point_count < 2` or a query fails.
    pub fn vapor_dome<Fluid, Model>(
        thermo: &Model,
        point_count: usize,
    ) -> Result<VaporDome<Fluid>, VaporDomeError>
    where
        Fluid: Clone + Default,
        Model: HasReferencePoints<Fluid = Fluid> + StateFrom<(Fluid, Pressure, Quality)>,
    {
        vapor_dome(thermo, point_count)
    }
}
