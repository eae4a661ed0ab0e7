//! Results types for a solved Rankine cycle.

use std::fmt;

use uom::si::{
    available_energy::kilojoule_per_kilogram, f64::Ratio, pressure::kilopascal, ratio::percent,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{thermo::State, units::SpecificEnthalpy};

use super::{CyclePaths, UnitSystem};

/// The five states and energy terms of a solved cycle.
///
/// States follow the flow through the loop:
///
/// | State | Location |
/// |---|---|
/// | `state_1` | turbine inlet |
/// | `state_2s` | turbine exit for an isentropic turbine |
/// | `state_2` | actual turbine exit, condenser inlet |
/// | `state_3` | condenser exit, pump inlet (saturated liquid) |
/// | `state_4` | pump exit, boiler inlet |
///
/// All energy terms are per unit mass of working fluid.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleResult<Fluid> {
    pub state_1: State<Fluid>,
    pub state_2s: State<Fluid>,
    pub state_2: State<Fluid>,
    pub state_3: State<Fluid>,
    pub state_4: State<Fluid>,

    /// `h1 − h2`.
    pub turbine_work: SpecificEnthalpy,

    /// `h4 − h3`.
    pub pump_work: SpecificEnthalpy,

    /// `h1 − h4`.
    pub heat_added: SpecificEnthalpy,

    /// Thermal efficiency, `(turbine_work − pump_work) / heat_added`.
    pub efficiency: Ratio,

    /// Turbine isentropic efficiency the cycle was solved with.
    pub turbine_efficiency: f64,

    pub unit_system: UnitSystem,
    pub name: String,
}

impl<Fluid> CycleResult<Fluid> {
    /// Net specific work, `turbine_work − pump_work`.
    #[must_use]
    pub fn net_work(&self) -> SpecificEnthalpy {
        self.turbine_work - self.pump_work
    }

    /// Diagram title naming the turbine inlet phase.
    ///
    /// For example, `"Rankine Cycle - Saturated Vapor at Turbine Inlet"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("Rankine Cycle - {} at Turbine Inlet", self.state_1.phase)
    }
}

impl<Fluid> fmt::Display for CycleResult<Fluid> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kj = |h: SpecificEnthalpy| h.get::<kilojoule_per_kilogram>();

        writeln!(f, "Cycle Summary for: {}", self.name)?;
        writeln!(f, "  {}", self.title())?;
        writeln!(
            f,
            "  Efficiency:         {:.3} %",
            self.efficiency.get::<percent>()
        )?;
        writeln!(f, "  Turbine Efficiency: {:.2}", self.turbine_efficiency)?;
        writeln!(f, "  Turbine Work:       {:.3} kJ/kg", kj(self.turbine_work))?;
        writeln!(f, "  Pump Work:          {:.3} kJ/kg", kj(self.pump_work))?;
        writeln!(f, "  Heat Added:         {:.3} kJ/kg", kj(self.heat_added))?;

        let states = [
            ("1", "Turbine Inlet", &self.state_1),
            ("2", "Turbine Exit", &self.state_2),
            ("3", "Pump Inlet", &self.state_3),
            ("4", "Pump Exit", &self.state_4),
        ];
        for (number, label, state) in states {
            write!(
                f,
                "  State {number} ({label}): p = {:.2} kPa, T = {:.2} °C, h = {:.2} kJ/kg, \
                 s = {:.4} kJ/(kg·K)",
                state.pressure.get::<kilopascal>(),
                state.temperature.get::<degree_celsius>(),
                kj(state.enthalpy),
                state.entropy.get::<kilojoule_per_kilogram_kelvin>(),
            )?;
            match state.quality {
                Some(x) => writeln!(f, ", x = {:.4}", x.value())?,
                None => writeln!(f, ", {}", state.phase)?,
            }
        }

        Ok(())
    }
}

/// A solved cycle together with its process paths.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleDiagram<Fluid> {
    pub result: CycleResult<Fluid>,
    pub paths: CyclePaths<Fluid>,
}
