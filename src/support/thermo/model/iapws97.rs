//! IAPWS-IF97 water and steam properties, backed by [`seuif97`].

use seuif97::{OH, OS, OT, OV, ph, ps, pt, px};
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    pressure::{megapascal, pascal},
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    thermo::{
        Phase, PropertyError, Quality, ReferencePoint, SaturationProperties, State,
        capability::{HasReferencePoints, HasSaturation, StateFrom, ThermoModel},
        fluid::Water,
    },
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

const TRIPLE_PRESSURE_PA: f64 = 611.657;
const TRIPLE_TEMPERATURE_K: f64 = 273.16;
const CRITICAL_PRESSURE_MPA: f64 = 22.064;
const CRITICAL_TEMPERATURE_K: f64 = 647.096;

/// Saturation pressure at 273.15 K, the lower end of region 4.
const MIN_SATURATION_PRESSURE_MPA: f64 = 611.213e-6;
const MAX_PRESSURE_MPA: f64 = 100.0;
const MIN_TEMPERATURE_C: f64 = 0.0;
const MAX_TEMPERATURE_C: f64 = 800.0;

/// Temperatures closer than this to saturation are on the saturation line.
const SATURATION_MATCH_C: f64 = 1e-9;

/// Region 3 of IF97, which contains the critical point.
const CRITICAL_REGION: i32 = 3;

/// Water and steam properties from the IAPWS-IF97 industrial formulation.
///
/// Valid for pressures up to 100 MPa and temperatures from 0 °C to 800 °C.
/// Saturated and two-phase states are built from the region 4 saturation
/// line using the lever rule.
///
/// # Example
///
/// ```
/// use twine_rankine::support::thermo::{
///     Phase, Quality,
///     capability::StateFrom,
///     model::Iapws97,
/// };
/// use uom::si::{f64::Pressure, pressure::kilopascal, thermodynamic_temperature::degree_celsius};
///
/// let steam = Iapws97;
/// let state = steam
///     .state_from((Pressure::new::<kilopascal>(100.0), Quality::saturated_vapor()))
///     .unwrap();
///
/// assert_eq!(state.phase, Phase::SaturatedVapor);
/// assert!((state.temperature.get::<degree_celsius>() - 99.6).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iapws97;

impl ThermoModel for Iapws97 {
    type Fluid = Water;
}

/// Where a property value falls relative to the dome at a fixed pressure.
enum DomePosition {
    Liquid,
    Inside(Quality),
    Vapor,
}

impl DomePosition {
    fn locate(value: f64, liquid: f64, vapor: f64) -> Result<Self, PropertyError> {
        if value < liquid {
            Ok(Self::Liquid)
        } else if value > vapor {
            Ok(Self::Vapor)
        } else {
            let x = ((value - liquid) / (vapor - liquid)).clamp(0.0, 1.0);
            Quality::new(x)
                .map(Self::Inside)
                .map_err(|err| PropertyError::calculation(format!("quality {x}: {err}")))
        }
    }
}

impl Iapws97 {
    /// Checks a pressure against the model's domain, returning it in MPa.
    fn pressure_mpa(pressure: Pressure) -> Result<f64, PropertyError> {
        let p = pressure.get::<megapascal>();
        if p.is_finite() && p > 0.0 && p <= MAX_PRESSURE_MPA {
            Ok(p)
        } else {
            Err(PropertyError::out_of_domain(format!(
                "pressure {p} MPa is outside (0, {MAX_PRESSURE_MPA}] MPa"
            )))
        }
    }

    /// Returns `true` if a vapor dome exists at `p` (in MPa).
    fn has_dome(p: f64) -> bool {
        (MIN_SATURATION_PRESSURE_MPA..CRITICAL_PRESSURE_MPA).contains(&p)
    }

    fn saturation_mpa(p: f64) -> Result<SaturationProperties, PropertyError> {
        if !Self::has_dome(p) {
            return Err(PropertyError::out_of_domain(format!(
                "saturation pressure {p} MPa is outside \
                 [{MIN_SATURATION_PRESSURE_MPA}, {CRITICAL_PRESSURE_MPA}) MPa"
            )));
        }

        let at = |x: f64, o, name: &str| finite(px(p, x, o), name, p);

        let t = at(0.0, OT, "saturation temperature")?;
        let h_f = at(0.0, OH, "liquid enthalpy")?;
        let h_g = at(1.0, OH, "vapor enthalpy")?;
        let s_f = at(0.0, OS, "liquid entropy")?;
        let s_g = at(1.0, OS, "vapor entropy")?;
        let v_f = at(0.0, OV, "liquid specific volume")?;
        let v_g = at(1.0, OV, "vapor specific volume")?;

        Ok(SaturationProperties {
            pressure: Pressure::new::<megapascal>(p),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
            enthalpy_liquid: SpecificEnthalpy::new::<kilojoule_per_kilogram>(h_f),
            enthalpy_vapor: SpecificEnthalpy::new::<kilojoule_per_kilogram>(h_g),
            entropy_liquid: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s_f),
            entropy_vapor: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s_g),
            volume_liquid: SpecificVolume::new::<cubic_meter_per_kilogram>(v_f),
            volume_vapor: SpecificVolume::new::<cubic_meter_per_kilogram>(v_g),
            internal_energy_liquid: internal_energy(h_f, p, v_f),
            internal_energy_vapor: internal_energy(h_g, p, v_g),
        })
    }

    /// Default phase label for a single-phase state at `p` (in MPa).
    fn off_dome_phase(p: f64, position: &DomePosition) -> Phase {
        if p >= CRITICAL_PRESSURE_MPA {
            Phase::Supercritical
        } else if matches!(position, DomePosition::Liquid) {
            Phase::Subcooled
        } else {
            Phase::Superheated
        }
    }
}

impl StateFrom<(Water, Pressure, ThermodynamicTemperature)> for Iapws97 {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, temperature): (Water, Pressure, ThermodynamicTemperature),
    ) -> Result<State<Water>, Self::Error> {
        let p = Self::pressure_mpa(pressure)?;
        let t = temperature.get::<degree_celsius>();
        if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&t) {
            return Err(PropertyError::out_of_domain(format!(
                "temperature {t} °C is outside [{MIN_TEMPERATURE_C}, {MAX_TEMPERATURE_C}] °C"
            )));
        }

        let phase = if p >= CRITICAL_PRESSURE_MPA {
            Phase::Supercritical
        } else if p < MIN_SATURATION_PRESSURE_MPA {
            Phase::Superheated
        } else {
            let t_sat = finite(px(p, 0.0, OT), "saturation temperature", p)?;
            if (t - t_sat).abs() <= SATURATION_MATCH_C {
                return Err(PropertyError::undefined(format!(
                    "{t} °C is the saturation temperature at {p} MPa"
                )));
            } else if t < t_sat {
                Phase::Subcooled
            } else {
                Phase::Superheated
            }
        };

        let h = finite(pt(p, t, OH), "enthalpy", p)?;
        let s = finite(pt(p, t, OS), "entropy", p)?;
        let v = finite(pt(p, t, OV), "specific volume", p)?;

        single_phase(p, t, h, s, v, phase, fluid)
    }
}

impl StateFrom<(Water, Pressure, Quality)> for Iapws97 {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, quality): (Water, Pressure, Quality),
    ) -> Result<State<Water>, Self::Error> {
        let p = Self::pressure_mpa(pressure)?;
        Ok(Self::saturation_mpa(p)?.mixture(quality, fluid))
    }
}

impl StateFrom<(Water, Pressure, SpecificEntropy)> for Iapws97 {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (Water, Pressure, SpecificEntropy),
    ) -> Result<State<Water>, Self::Error> {
        let p = Self::pressure_mpa(pressure)?;
        let s = entropy.get::<kilojoule_per_kilogram_kelvin>();
        if !s.is_finite() {
            return Err(PropertyError::invalid_state(format!("entropy {s} kJ/(kg·K)")));
        }

        let position = if Self::has_dome(p) {
            let sat = Self::saturation_mpa(p)?;
            let position = DomePosition::locate(
                s,
                sat.entropy_liquid.get::<kilojoule_per_kilogram_kelvin>(),
                sat.entropy_vapor.get::<kilojoule_per_kilogram_kelvin>(),
            )?;
            if let DomePosition::Inside(quality) = position {
                return Ok(sat.mixture(quality, fluid));
            }
            position
        } else {
            DomePosition::Vapor
        };

        let t = finite(ps(p, s, OT), "temperature", p)?;
        let h = finite(ps(p, s, OH), "enthalpy", p)?;
        let v = finite(ps(p, s, OV), "specific volume", p)?;

        single_phase(p, t, h, s, v, Self::off_dome_phase(p, &position), fluid)
    }
}

impl StateFrom<(Water, Pressure, SpecificEnthalpy)> for Iapws97 {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (Water, Pressure, SpecificEnthalpy),
    ) -> Result<State<Water>, Self::Error> {
        let p = Self::pressure_mpa(pressure)?;
        let h = enthalpy.get::<kilojoule_per_kilogram>();
        if !h.is_finite() {
            return Err(PropertyError::invalid_state(format!("enthalpy {h} kJ/kg")));
        }

        let position = if Self::has_dome(p) {
            let sat = Self::saturation_mpa(p)?;
            let position = DomePosition::locate(
                h,
                sat.enthalpy_liquid.get::<kilojoule_per_kilogram>(),
                sat.enthalpy_vapor.get::<kilojoule_per_kilogram>(),
            )?;
            if let DomePosition::Inside(quality) = position {
                return Ok(sat.mixture(quality, fluid));
            }
            position
        } else {
            DomePosition::Vapor
        };

        let t = finite(ph(p, h, OT), "temperature", p)?;
        let s = finite(ph(p, h, OS), "entropy", p)?;
        let v = finite(ph(p, h, OV), "specific volume", p)?;

        single_phase(p, t, h, s, v, Self::off_dome_phase(p, &position), fluid)
    }
}

impl HasSaturation for Iapws97 {
    fn saturation(&self, pressure: Pressure) -> Result<SaturationProperties, PropertyError> {
        Self::saturation_mpa(Self::pressure_mpa(pressure)?)
    }
}

impl HasReferencePoints for Iapws97 {
    fn triple_point(&self) -> ReferencePoint {
        ReferencePoint {
            pressure: Pressure::new::<pascal>(TRIPLE_PRESSURE_PA),
            temperature: ThermodynamicTemperature::new::<kelvin>(TRIPLE_TEMPERATURE_K),
        }
    }

    fn critical_point(&self) -> ReferencePoint {
        ReferencePoint {
            pressure: Pressure::new::<megapascal>(CRITICAL_PRESSURE_MPA),
            temperature: ThermodynamicTemperature::new::<kelvin>(CRITICAL_TEMPERATURE_K),
        }
    }

    fn critical_state(&self) -> Result<State<Water>, PropertyError> {
        let p = CRITICAL_PRESSURE_MPA;
        let t = ThermodynamicTemperature::new::<kelvin>(CRITICAL_TEMPERATURE_K)
            .get::<degree_celsius>();

        let h = finite(pt(p, t, (OH, CRITICAL_REGION)), "critical enthalpy", p)?;
        let s = finite(pt(p, t, (OS, CRITICAL_REGION)), "critical entropy", p)?;
        let v = finite(pt(p, t, (OV, CRITICAL_REGION)), "critical specific volume", p)?;

        single_phase(p, t, h, s, v, Phase::Supercritical, Water)
    }
}

/// Rejects the NaN that `seuif97` returns when a calculation fails.
fn finite(value: f64, name: &str, p: f64) -> Result<f64, PropertyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PropertyError::calculation(format!(
            "IF97 {name} is not finite at {p} MPa"
        )))
    }
}

/// `u = h − p·v`, with `h` in kJ/kg, `p` in MPa and `v` in m³/kg.
fn internal_energy(h: f64, p: f64, v: f64) -> SpecificInternalEnergy {
    SpecificInternalEnergy::new::<kilojoule_per_kilogram>(h - p * 1000.0 * v)
}

fn single_phase(
    p: f64,
    t: f64,
    h: f64,
    s: f64,
    v: f64,
    phase: Phase,
    fluid: Water,
) -> Result<State<Water>, PropertyError> {
    if v <= 0.0 {
        return Err(PropertyError::invalid_state(format!(
            "specific volume {v} m³/kg at {p} MPa and {t} °C"
        )));
    }

    Ok(State {
        pressure: Pressure::new::<megapascal>(p),
        temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
        enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(h),
        entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s),
        specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(v),
        internal_energy: internal_energy(h, p, v),
        quality: None,
        phase,
        fluid,
    })
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Iapws97>();
};
