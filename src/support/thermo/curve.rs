use std::slice;

use uom::si::{
    available_energy::kilojoule_per_kilogram, pressure::kilopascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::degree_celsius,
};

use crate::support::thermo::State;

/// An ordered sequence of states, in rendering order.
///
/// Adjacent segments of a process path may share a joint, so a curve can hold
/// the same state more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<Fluid> {
    states: Vec<State<Fluid>>,
}

impl<Fluid> Curve<Fluid> {
    /// Creates an empty curve.
    #[must_use]
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Creates an empty curve with room for `capacity` states.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
        }
    }

    /// Appends a state to the end of the curve.
    pub fn push(&mut self, state: State<Fluid>) {
        self.states.push(state);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, State<Fluid>> {
        self.states.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&State<Fluid>> {
        self.states.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&State<Fluid>> {
        self.states.last()
    }

    #[must_use]
    pub fn states(&self) -> &[State<Fluid>] {
        &self.states
    }

    #[must_use]
    pub fn into_states(self) -> Vec<State<Fluid>> {
        self.states
    }

    /// Extracts one property along the curve, as plain numbers.
    ///
    /// Values are in the units documented on [`Property`].
    ///
    /// # Example
    ///
    /// ```
    /// use twine_rankine::support::thermo::{Curve, Property, State, Phase, fluid::Water};
    /// # use twine_rankine::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};
    /// # use uom::si::{
    /// #     available_energy::kilojoule_per_kilogram,
    /// #     f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    /// #     pressure::kilopascal,
    /// #     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    /// #     specific_volume::cubic_meter_per_kilogram,
    /// #     thermodynamic_temperature::degree_celsius,
    /// # };
    /// # let state = |p: f64, t: f64| State {
    /// #     pressure: Pressure::new::<kilopascal>(p),
    /// #     temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
    /// #     enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(3000.0),
    /// #     entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(7.0),
    /// #     specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(0.5),
    /// #     internal_energy: SpecificInternalEnergy::new::<kilojoule_per_kilogram>(2800.0),
    /// #     quality: None,
    /// #     phase: Phase::Superheated,
    /// #     fluid: Water,
    /// # };
    ///
    /// let curve: Curve<Water> = [state(500.0, 200.0), state(400.0, 180.0)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let pressures = curve.column(Property::Pressure);
    /// assert_eq!(pressures.len(), 2);
    /// assert!((pressures[0] - 500.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn column(&self, property: Property) -> Vec<f64> {
        self.states.iter().map(|state| property.value(state)).collect()
    }
}

impl<Fluid> Default for Curve<Fluid> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Fluid> FromIterator<State<Fluid>> for Curve<Fluid> {
    fn from_iter<I: IntoIterator<Item = State<Fluid>>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl<Fluid> Extend<State<Fluid>> for Curve<Fluid> {
    fn extend<I: IntoIterator<Item = State<Fluid>>>(&mut self, iter: I) {
        self.states.extend(iter);
    }
}

impl<'a, Fluid> IntoIterator for &'a Curve<Fluid> {
    type Item = &'a State<Fluid>;
    type IntoIter = slice::Iter<'a, State<Fluid>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// A plottable state property.
///
/// | Property | Unit |
/// |---|---|
/// | `Temperature` | °C |
/// | `Pressure` | kPa |
/// | `InternalEnergy` | kJ/kg |
/// | `Enthalpy` | kJ/kg |
/// | `Entropy` | kJ/(kg·K) |
/// | `SpecificVolume` | m³/kg |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Temperature,
    Pressure,
    InternalEnergy,
    Enthalpy,
    Entropy,
    SpecificVolume,
}

impl Property {
    /// Every property, in a stable order.
    pub const ALL: [Property; 6] = [
        Property::Temperature,
        Property::Pressure,
        Property::InternalEnergy,
        Property::Enthalpy,
        Property::Entropy,
        Property::SpecificVolume,
    ];

    /// Reads this property from `state` in its display unit.
    #[must_use]
    pub fn value<Fluid>(self, state: &State<Fluid>) -> f64 {
        match self {
            Self::Temperature => state.temperature.get::<degree_celsius>(),
            Self::Pressure => state.pressure.get::<kilopascal>(),
            Self::InternalEnergy => state.internal_energy.get::<kilojoule_per_kilogram>(),
            Self::Enthalpy => state.enthalpy.get::<kilojoule_per_kilogram>(),
            Self::Entropy => state.entropy.get::<kilojoule_per_kilogram_kelvin>(),
            Self::SpecificVolume => state.specific_volume.get::<cubic_meter_per_kilogram>(),
        }
    }
}
