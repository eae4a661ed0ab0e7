//! Power cycle models.

pub mod rankine;
