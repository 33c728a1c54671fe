//! Crypto errors.

use thiserror::Error;

/// Crypto error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid signature format {sig}")]
    InvalidSignatureFormat { sig: String },
    #[error("Invalid HMAC secret key length")]
    InvalidSecretKeyLength,
    #[error("Invalid request timestamp '{timestamp}'")]
    InvalidTimestamp { timestamp: String },
    #[error("Request timestamp {timestamp} is too old (now: {now})")]
    ExpiredTimestamp { timestamp: i64, now: i64 },
    #[error("Signature mismatch")]
    SignatureMismatch,
}

/// Result alias for `CryptoError`.
pub type Result<T, E = CryptoError> = ::core::result::Result<T, E>;
