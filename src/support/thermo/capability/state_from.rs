use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a pair of independent properties.
///
/// Which property pairs a model accepts is a compile-time fact: a model that
/// cannot solve from `(Pressure, SpecificEnthalpy)` simply does not implement
/// `StateFrom<(Pressure, SpecificEnthalpy)>`.
///
/// The inputs a steam cycle needs are:
/// - `(Fluid, Pressure, ThermodynamicTemperature)` for single-phase states
/// - `(Fluid, Pressure, Quality)` for states on or inside the dome
/// - `(Fluid, Pressure, SpecificEntropy)` for isentropic processes
/// - `(Fluid, Pressure, SpecificEnthalpy)` for the real turbine exit
///
/// ## Marker fluids
///
/// When `Fluid: Default` the leading fluid can be left out. A model that
/// implements `StateFrom<(Fluid, A, B)>` gets `StateFrom<(A, B)>` for free,
/// which fills in `Fluid::default()`.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no valid state corresponds to `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
