use thiserror::Error;

/// Errors a property model may report for a state or saturation query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The inputs do not determine a unique state.
    ///
    /// For example, pressure and temperature on the saturation line.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The inputs fall outside the model's valid domain.
    ///
    /// For example, a saturation query above the critical pressure.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The inputs or the resulting state are not physical.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The backend produced a non-numeric or otherwise unusable result.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}

#[cfg(any(test, feature = "iapws97"))]
impl PropertyError {
    pub(crate) fn undefined(context: impl Into<String>) -> Self {
        Self::Undefined {
            context: context.into(),
        }
    }

    pub(crate) fn out_of_domain(context: impl Into<String>) -> Self {
        Self::OutOfDomain {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_state(context: impl Into<String>) -> Self {
        Self::InvalidState {
            context: context.into(),
        }
    }

    pub(crate) fn calculation(context: impl Into<String>) -> Self {
        Self::Calculation {
            context: context.into(),
        }
    }
}
