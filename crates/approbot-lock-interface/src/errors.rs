use thiserror::Error;

/// Lock error.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum LockError {
    /// Unusable lock backend address.
    #[error("Unsupported lock address: {address}")]
    InvalidAddress { address: String },

    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
