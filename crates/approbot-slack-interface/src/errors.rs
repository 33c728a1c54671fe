//! Slack errors.

use thiserror::Error;

/// Error code returned when the reaction is already there.
pub const ALREADY_REACTED: &str = "already_reacted";

/// Slack error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SlackError {
    /// Slack answered with `ok: false`.
    #[error("Slack method '{method}' failed: {error}")]
    ApiError { method: String, error: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl SlackError {
    /// Build an API error from a method name and an error code.
    pub fn api_error(method: &str, error: &str) -> Self {
        Self::ApiError {
            method: method.into(),
            error: error.into(),
        }
    }

    /// Is this the "reaction already present" error.
    pub fn is_already_reacted(&self) -> bool {
        matches!(self, Self::ApiError { error, .. } if error == ALREADY_REACTED)
    }
}

/// Result alias for `SlackError`.
pub type Result<T, E = SlackError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_reacted() {
        assert!(SlackError::api_error("reactions.add", "already_reacted").is_already_reacted());
        assert!(!SlackError::api_error("reactions.add", "invalid_name").is_already_reacted());
        assert!(!SlackError::ImplementationError {
            source: "boom".into()
        }
        .is_already_reacted());
    }
}
