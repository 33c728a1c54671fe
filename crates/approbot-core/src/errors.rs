//! Core errors.

use thiserror::Error;

/// Core error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`approbot_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: approbot_ghapi_interface::ApiError,
    },

    /// Wraps [`approbot_slack_interface::SlackError`].
    #[error("Slack error: {source}")]
    SlackError {
        source: approbot_slack_interface::SlackError,
    },

    /// Wraps [`approbot_database_interface::DatabaseError`].
    #[error("Database error: {source}")]
    DatabaseError {
        source: approbot_database_interface::DatabaseError,
    },

    #[error("Lock service error: {source}")]
    LockError {
        source: approbot_lock_interface::LockError,
    },
}

impl From<approbot_ghapi_interface::ApiError> for DomainError {
    fn from(e: approbot_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<approbot_slack_interface::SlackError> for DomainError {
    fn from(e: approbot_slack_interface::SlackError) -> Self {
        Self::SlackError { source: e }
    }
}

impl From<approbot_database_interface::DatabaseError> for DomainError {
    fn from(e: approbot_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

impl From<approbot_lock_interface::LockError> for DomainError {
    fn from(e: approbot_lock_interface::LockError) -> Self {
        Self::LockError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
