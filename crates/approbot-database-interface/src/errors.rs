use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Unknown delegated credential for user '{0}'")]
    UnknownDelegatedCredential(String),

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type Result<T, E = DatabaseError> = core::result::Result<T, E>;
