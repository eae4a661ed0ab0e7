//! Thermodynamic property modeling for phase-change working fluids.
//!
//! A property model is queried through the capability traits in
//! [`capability`]. Each query returns a complete, independently owned
//! [`State`], so callers can hold on to states without worrying about aliasing
//! between them.

mod curve;
mod error;
mod quality;
mod saturation;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use curve::{Curve, Property};
pub use error::PropertyError;
pub use quality::Quality;
pub use saturation::{ReferencePoint, SaturationProperties};
pub use state::{Phase, State};
