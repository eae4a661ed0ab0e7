//! Rankine power cycle models.
//!
//! [`RankineModel`] and [`VaporDomeModel`] are thin [`twine_core::Model`]
//! adapters over [`RankineCycle`], which can also be called directly.

mod core;

pub use self::core::{
    CycleDiagram, CycleError, CyclePaths, CycleResult, CycleSpec, DEFAULT_VAPOR_DOME_POINTS,
    PathConfig, PressureSide, Process, RankineCycle, RankineThermoModel, Segment, SpecError,
    TurbineInlet, UnitSystem, VaporDome, VaporDomeError,
};

use std::marker::PhantomData;

use twine_core::Model;

/// Solves a cycle and builds its process paths in one call.
///
/// Wraps a property model and a [`PathConfig`]. Each call takes a
/// [`CycleSpec`] and returns the full [`CycleDiagram`].
#[derive(Debug, Clone)]
pub struct RankineModel<Fluid, Thermo> {
    thermo: Thermo,
    config: PathConfig,
    _fluid: PhantomData<Fluid>,
}

impl<Fluid, Thermo> RankineModel<Fluid, Thermo> {
    /// Creates a model with the default [`PathConfig`].
    pub fn new(thermo: Thermo) -> Self {
        Self::with_config(thermo, PathConfig::default())
    }

    pub fn with_config(thermo: Thermo, config: PathConfig) -> Self {
        Self {
            thermo,
            config,
            _fluid: PhantomData,
        }
    }

    pub fn thermo(&self) -> &Thermo {
        &self.thermo
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }
}

impl<Fluid, Thermo> Model for RankineModel<Fluid, Thermo>
where
    Fluid: Clone + Default,
    Thermo: RankineThermoModel<Fluid>,
{
    type Input = CycleSpec;
    type Output = CycleDiagram<Fluid>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        RankineCycle::solve_with_paths(input, &self.thermo, &self.config)
    }
}

/// Builds the vapor dome of a property model.
///
/// The input is the number of isobars to sample.
#[derive(Debug, Clone)]
pub struct VaporDomeModel<Fluid, Thermo> {
    thermo: Thermo,
    _fluid: PhantomData<Fluid>,
}

impl<Fluid, Thermo> VaporDomeModel<Fluid, Thermo> {
    pub fn new(thermo: Thermo) -> Self {
        Self {
            thermo,
            _fluid: PhantomData,
        }
    }
}

impl<Fluid, Thermo> Model for VaporDomeModel<Fluid, Thermo>
where
    Fluid: Clone + Default,
    Thermo: RankineThermoModel<Fluid>,
{
    type Input = usize;
    type Output = VaporDome<Fluid>;
    type Error = VaporDomeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        RankineCycle::vapor_dome(&self.thermo, *input)
    }
}
