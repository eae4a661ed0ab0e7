//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Each model decides which fluids it knows,
//! through its [`ThermoModel::Fluid`](crate::support::thermo::capability::ThermoModel::Fluid).

mod water;

pub use water::Water;
