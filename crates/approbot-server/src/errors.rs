//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Missing webhook signature.")]
    MissingWebhookSignature,

    #[error("Invalid webhook signature.")]
    InvalidWebhookSignature,

    #[error("Malformed request body: {message}")]
    MalformedBody { message: String },

    #[error("I/O error: {source}")]
    IoError { source: std::io::Error },

    #[error("Metrics error: {source}")]
    MetricsError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::MissingWebhookSignature | ServerError::InvalidWebhookSignature => {
                StatusCode::UNAUTHORIZED
            }
            ServerError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Result alias for `ServerError`.
pub type Result<T, E = ServerError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ServerError::MissingWebhookSignature.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServerError::InvalidWebhookSignature.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServerError::MalformedBody {
                message: "oops".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::IoError {
                source: std::io::Error::other("boom")
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
