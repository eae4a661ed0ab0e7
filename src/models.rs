//! Public Twine models.
//!
//! Models are organized into domain-specific submodules. Each model lives in
//! its own module and contains an internal `core` submodule where the
//! computation lives. The `core` module is not part of the public API; its
//! entry point and types are re-exported by the model module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the core API. A single core may back several adapters.

pub mod power;
