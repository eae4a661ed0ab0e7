//! Capability traits used to query a property model.
//!
//! A model advertises what it can compute by the traits it implements. The
//! Rankine core asks for exactly four state inputs plus saturation and
//! reference-point lookups, bundled as
//! [`RankineThermoModel`](crate::models::power::rankine::RankineThermoModel).

mod base;
mod saturation;
mod state_from;

pub use base::ThermoModel;
pub use saturation::{HasReferencePoints, HasSaturation};
pub use state_from::StateFrom;
