use thiserror::Error;

/// Errors that can occur while building a vapor dome.
#[derive(Debug, Error)]
pub enum VaporDomeError {
    /// A dome needs at least its two end isobars.
    #[error("vapor dome needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    /// A property model query failed.
    #[error("property lookup failed: {context}")]
    PropertyLookup {
        context: String,

        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl VaporDomeError {
    pub(crate) fn thermo_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::PropertyLookup {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
