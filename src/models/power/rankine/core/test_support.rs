use std::cell::Cell;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    pressure::kilopascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        Phase, PropertyError, Quality, ReferencePoint, SaturationProperties, State,
        capability::{HasReferencePoints, HasSaturation, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

/// Gas constant of water vapor, kJ/(kg·K).
const R: f64 = 0.4615;
/// Constant latent heat, kJ/kg.
const LATENT_HEAT: f64 = 2257.0;
/// Normal boiling point anchoring the saturation line.
const T_BOIL: f64 = 373.15;
const P_BOIL: f64 = 101.325;
/// Zero of liquid enthalpy and entropy, K.
const T_REF: f64 = 273.16;
const CP_LIQUID: f64 = 4.18;
const CP_VAPOR: f64 = 2.0;
const V_LIQUID: f64 = 0.001;
const P_CRITICAL: f64 = 22_064.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct TestFluid;

/// Closed-form water-like model with a query counter.
///
/// The saturation line follows Clausius-Clapeyron with a constant latent heat.
/// Liquid is incompressible with constant `cp` and vapor is an ideal gas with
/// constant `cp`, so every inversion is exact.
///
/// All values are in kPa, K, kJ/kg, kJ/(kg·K), and m³/kg.
#[derive(Debug, Default)]
pub(super) struct IdealSteam {
    queries: Cell<usize>,
}

impl IdealSteam {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Number of state and saturation queries answered so far.
    pub(super) fn query_count(&self) -> usize {
        self.queries.get()
    }

    fn count(&self) {
        self.queries.set(self.queries.get() + 1);
    }

    fn t_sat(p: f64) -> f64 {
        1.0 / (1.0 / T_BOIL - (R / LATENT_HEAT) * (p / P_BOIL).ln())
    }

    fn p_sat(t: f64) -> f64 {
        P_BOIL * ((LATENT_HEAT / R) * (1.0 / T_BOIL - 1.0 / t)).exp()
    }

    fn check_pressure(p: f64) -> Result<(), PropertyError> {
        let p_triple = Self::p_sat(T_REF);
        if p.is_finite() && p >= p_triple && p < P_CRITICAL {
            Ok(())
        } else {
            Err(PropertyError::out_of_domain(format!(
                "test model pressure {p} kPa"
            )))
        }
    }

    fn saturation_kpa(p: f64) -> Result<SaturationProperties, PropertyError> {
        Self::check_pressure(p)?;

        let t = Self::t_sat(p);
        let h_f = CP_LIQUID * (t - T_REF) + V_LIQUID * p;
        let s_f = CP_LIQUID * (t / T_REF).ln();
        let v_g = R * t / p;
        let h_g = h_f + LATENT_HEAT;

        Ok(SaturationProperties {
            pressure: kpa(p),
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            enthalpy_liquid: kj(h_f),
            enthalpy_vapor: kj(h_g),
            entropy_liquid: kjk(s_f),
            entropy_vapor: kjk(s_f + LATENT_HEAT / t),
            volume_liquid: m3(V_LIQUID),
            volume_vapor: m3(v_g),
            internal_energy_liquid: u(h_f - p * V_LIQUID),
            internal_energy_vapor: u(h_g - p * v_g),
        })
    }

    fn liquid(p: f64, t: f64) -> State<TestFluid> {
        let h = CP_LIQUID * (t - T_REF) + V_LIQUID * p;
        State {
            pressure: kpa(p),
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            enthalpy: kj(h),
            entropy: kjk(CP_LIQUID * (t / T_REF).ln()),
            specific_volume: m3(V_LIQUID),
            internal_energy: u(h - p * V_LIQUID),
            quality: None,
            phase: Phase::Subcooled,
            fluid: TestFluid,
        }
    }

    fn vapor(p: f64, t: f64) -> Result<State<TestFluid>, PropertyError> {
        let sat = Self::saturation_kpa(p)?;
        let t_sat = Self::t_sat(p);
        let h = sat.enthalpy_vapor.get::<kilojoule_per_kilogram>() + CP_VAPOR * (t - t_sat);
        let v = R * t / p;
        Ok(State {
            pressure: kpa(p),
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            enthalpy: kj(h),
            entropy: kjk(
                sat.entropy_vapor.get::<kilojoule_per_kilogram_kelvin>()
                    + CP_VAPOR * (t / t_sat).ln(),
            ),
            specific_volume: m3(v),
            internal_energy: u(h - p * v),
            quality: None,
            phase: Phase::Superheated,
            fluid: TestFluid,
        })
    }
}

impl ThermoModel for IdealSteam {
    type Fluid = TestFluid;
}

impl StateFrom<(TestFluid, Pressure, ThermodynamicTemperature)> for IdealSteam {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_fluid, pressure, temperature): (TestFluid, Pressure, ThermodynamicTemperature),
    ) -> Result<State<TestFluid>, Self::Error> {
        self.count();
        let p = pressure.get::<kilopascal>();
        let t = temperature.get::<kelvin>();
        Self::check_pressure(p)?;

        let t_sat = Self::t_sat(p);
        if t < t_sat {
            Ok(Self::liquid(p, t))
        } else if t > t_sat {
            Self::vapor(p, t)
        } else {
            Err(PropertyError::undefined(format!(
                "{t} K is saturated at {p} kPa"
            )))
        }
    }
}

impl StateFrom<(TestFluid, Pressure, Quality)> for IdealSteam {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, quality): (TestFluid, Pressure, Quality),
    ) -> Result<State<TestFluid>, Self::Error> {
        self.count();
        Ok(Self::saturation_kpa(pressure.get::<kilopascal>())?.mixture(quality, fluid))
    }
}

impl StateFrom<(TestFluid, Pressure, SpecificEntropy)> for IdealSteam {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (TestFluid, Pressure, SpecificEntropy),
    ) -> Result<State<TestFluid>, Self::Error> {
        self.count();
        let p = pressure.get::<kilopascal>();
        let s = entropy.get::<kilojoule_per_kilogram_kelvin>();
        let sat = Self::saturation_kpa(p)?;
        let s_f = sat.entropy_liquid.get::<kilojoule_per_kilogram_kelvin>();
        let s_g = sat.entropy_vapor.get::<kilojoule_per_kilogram_kelvin>();

        if s < s_f {
            Ok(Self::liquid(p, T_REF * (s / CP_LIQUID).exp()))
        } else if s > s_g {
            Self::vapor(p, Self::t_sat(p) * ((s - s_g) / CP_VAPOR).exp())
        } else {
            Ok(sat.mixture(quality((s - s_f) / (s_g - s_f))?, fluid))
        }
    }
}

impl StateFrom<(TestFluid, Pressure, SpecificEnthalpy)> for IdealSteam {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (TestFluid, Pressure, SpecificEnthalpy),
    ) -> Result<State<TestFluid>, Self::Error> {
        self.count();
        let p = pressure.get::<kilopascal>();
        let h = enthalpy.get::<kilojoule_per_kilogram>();
        let sat = Self::saturation_kpa(p)?;
        let h_f = sat.enthalpy_liquid.get::<kilojoule_per_kilogram>();
        let h_g = sat.enthalpy_vapor.get::<kilojoule_per_kilogram>();

        if h < h_f {
            Ok(Self::liquid(p, T_REF + (h - V_LIQUID * p) / CP_LIQUID))
        } else if h > h_g {
            Self::vapor(p, Self::t_sat(p) + (h - h_g) / CP_VAPOR)
        } else {
            Ok(sat.mixture(quality((h - h_f) / (h_g - h_f))?, fluid))
        }
    }
}

impl HasSaturation for IdealSteam {
    fn saturation(&self, pressure: Pressure) -> Result<SaturationProperties, PropertyError> {
        self.count();
        Self::saturation_kpa(pressure.get::<kilopascal>())
    }
}

impl HasReferencePoints for IdealSteam {
    fn triple_point(&self) -> ReferencePoint {
        ReferencePoint {
            pressure: kpa(Self::p_sat(T_REF)),
            temperature: ThermodynamicTemperature::new::<kelvin>(T_REF),
        }
    }

    fn critical_point(&self) -> ReferencePoint {
        ReferencePoint {
            pressure: kpa(P_CRITICAL),
            temperature: ThermodynamicTemperature::new::<kelvin>(Self::t_sat(P_CRITICAL)),
        }
    }

    /// The dome of this model never closes, so the critical state is the
    /// midpoint of the last isobar.
    fn critical_state(&self) -> Result<State<TestFluid>, PropertyError> {
        let below = Self::saturation_kpa(P_CRITICAL * (1.0 - 1e-12))?;
        let mid = below.mixture(quality(0.5)?, TestFluid);
        Ok(State {
            pressure: kpa(P_CRITICAL),
            quality: None,
            phase: Phase::Supercritical,
            ..mid
        })
    }
}

/// How a [`FaultySteam`] misbehaves.
#[derive(Debug, Clone, Copy)]
pub(super) enum Fault {
    /// Rejects every `(p, h)` query.
    RejectEnthalpy,

    /// Rejects every query once this many have been answered.
    RejectAfter(usize),

    /// Reports this enthalpy for compressed liquid found by `(p, s)`.
    LiquidEnthalpy(SpecificEnthalpy),
}

/// [`IdealSteam`] with one injected [`Fault`].
///
/// Reference points are never faulted.
#[derive(Debug)]
pub(super) struct FaultySteam {
    steam: IdealSteam,
    fault: Fault,
}

impl FaultySteam {
    pub(super) fn new(fault: Fault) -> Self {
        Self {
            steam: IdealSteam::new(),
            fault,
        }
    }

    pub(super) fn query_count(&self) -> usize {
        self.steam.query_count()
    }

    fn check_budget(&self) -> Result<(), PropertyError> {
        match self.fault {
            Fault::RejectAfter(limit) if self.steam.query_count() >= limit => Err(
                PropertyError::invalid_state(format!("test model refused query {}", limit + 1)),
            ),
            _ => Ok(()),
        }
    }
}

impl ThermoModel for FaultySteam {
    type Fluid = TestFluid;
}

impl StateFrom<(TestFluid, Pressure, ThermodynamicTemperature)> for FaultySteam {
    type Error = PropertyError;

    fn state_from(
        &self,
        input: (TestFluid, Pressure, ThermodynamicTemperature),
    ) -> Result<State<TestFluid>, Self::Error> {
        self.check_budget()?;
        self.steam.state_from(input)
    }
}

impl StateFrom<(TestFluid, Pressure, Quality)> for FaultySteam {
    type Error = PropertyError;

    fn state_from(
        &self,
        input: (TestFluid, Pressure, Quality),
    ) -> Result<State<TestFluid>, Self::Error> {
        self.check_budget()?;
        self.steam.state_from(input)
    }
}

impl StateFrom<(TestFluid, Pressure, SpecificEntropy)> for FaultySteam {
    type Error = PropertyError;

    fn state_from(
        &self,
        input: (TestFluid, Pressure, SpecificEntropy),
    ) -> Result<State<TestFluid>, Self::Error> {
        self.check_budget()?;
        let state = self.steam.state_from(input)?;
        match self.fault {
            Fault::LiquidEnthalpy(enthalpy) if state.phase == Phase::Subcooled => {
                Ok(State { enthalpy, ..state })
            }
            _ => Ok(state),
        }
    }
}

impl StateFrom<(TestFluid, Pressure, SpecificEnthalpy)> for FaultySteam {
    type Error = PropertyError;

    fn state_from(
        &self,
        input: (TestFluid, Pressure, SpecificEnthalpy),
    ) -> Result<State<TestFluid>, Self::Error> {
        self.check_budget()?;
        if matches!(self.fault, Fault::RejectEnthalpy) {
            return Err(PropertyError::invalid_state("test model refuses (p, h) queries"));
        }
        self.steam.state_from(input)
    }
}

impl HasSaturation for FaultySteam {
    fn saturation(&self, pressure: Pressure) -> Result<SaturationProperties, PropertyError> {
        self.check_budget()?;
        self.steam.saturation(pressure)
    }
}

impl HasReferencePoints for FaultySteam {
    fn triple_point(&self) -> ReferencePoint {
        self.steam.triple_point()
    }

    fn critical_point(&self) -> ReferencePoint {
        self.steam.critical_point()
    }

    fn critical_state(&self) -> Result<State<TestFluid>, PropertyError> {
        self.steam.critical_state()
    }
}

fn quality(x: f64) -> Result<Quality, PropertyError> {
    Quality::new(x.clamp(0.0, 1.0)).map_err(|err| PropertyError::calculation(err.to_string()))
}

pub(super) fn kpa(value: f64) -> Pressure {
    Pressure::new::<kilopascal>(value)
}

pub(super) fn kj(value: f64) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<kilojoule_per_kilogram>(value)
}

fn kjk(value: f64) -> SpecificEntropy {
    SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(value)
}

fn m3(value: f64) -> SpecificVolume {
    SpecificVolume::new::<cubic_meter_per_kilogram>(value)
}

fn u(value: f64) -> SpecificInternalEnergy {
    SpecificInternalEnergy::new::<kilojoule_per_kilogram>(value)
}
