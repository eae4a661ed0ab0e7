use thiserror::Error;

use crate::{models::power::rankine::core::SpecError, support::units::SpecificEnthalpy};

/// Errors that can occur while solving a cycle or building its paths.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The specification is inconsistent with the property model.
    #[error("invalid cycle specification")]
    InvalidSpec(#[from] SpecError),

    /// The path configuration cannot produce a curve.
    #[error("invalid path configuration: {context}")]
    InvalidConfig { context: String },

    /// A property model query failed.
    ///
    /// No partial result survives a failed query.
    #[error("property lookup failed: {context}")]
    PropertyLookup {
        /// The query that failed.
        context: String,

        /// Underlying property model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The cycle adds no usable heat, so efficiency is undefined.
    #[error("degenerate cycle: heat_added={heat_added:?}")]
    DegenerateCycle { heat_added: SpecificEnthalpy },
}

impl CycleError {
    /// Creates a property lookup error with context.
    pub(crate) fn thermo_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::PropertyLookup {
            context: context.into(),
            source: Box::new(err),
        }
    }

    pub(crate) fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }
}
