//! # Twine Rankine
//!
//! Rankine power cycle models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a condenser pressure, a boiler pressure, a turbine inlet condition,
//! and a turbine isentropic efficiency, the cycle model computes the four
//! cycle states, the work and heat terms, and the thermal efficiency. It also
//! samples each process into curves for drawing the cycle, along with the
//! fluid's vapor dome, on any two-property diagram.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations.
//! - [`support`]: Property model traits, states, and constrained types.
//!
//! ## Property models
//!
//! Fluid properties come from any type implementing the capability traits in
//! [`support::thermo::capability`]. With the default `iapws97` feature the
//! crate provides [`support::thermo::model::Iapws97`] for water and steam.
//!
//! ## Logging
//!
//! Solver and path builder events are emitted through [`tracing`]. The crate
//! never installs a subscriber.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod models;
pub mod support;
