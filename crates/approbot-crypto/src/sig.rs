use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use super::errors::{CryptoError, Result};

/// Slack signature version prefix.
pub const SIGNATURE_VERSION: &str = "v0";
/// Maximum accepted clock skew between Slack and us.
pub const SIGNATURE_TOLERANCE_IN_SECONDS: u64 = 60 * 5;

/// Slack request signature, as found in request headers.
pub struct SlackSignature<'a> {
    /// Signature header value (`v0=<hex>`).
    pub signature: &'a str,
    /// Request timestamp header value.
    pub timestamp: &'a str,
}

impl<'a> SlackSignature<'a> {
    /// Create a signature from header values.
    pub fn new(signature: &'a str, timestamp: &'a str) -> Self {
        Self {
            signature,
            timestamp,
        }
    }

    /// Compute the `v0=` signature for a body.
    pub fn compute(body: &[u8], timestamp: &str, secret: &str) -> Result<String> {
        let hmac = Self::build_hmac(body, timestamp, secret)?;
        Ok(format!(
            "{}={}",
            SIGNATURE_VERSION,
            hex::encode(hmac.finalize().into_bytes())
        ))
    }

    /// Check if the signature is valid right now.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> bool {
        self.verify(body, secret, now_timestamp()).is_ok()
    }

    /// Verify the signature against a body, at a given time.
    pub fn verify(&self, body: &[u8], secret: &str, now: i64) -> Result<()> {
        let timestamp =
            self.timestamp
                .trim()
                .parse::<i64>()
                .map_err(|_| CryptoError::InvalidTimestamp {
                    timestamp: self.timestamp.to_string(),
                })?;

        let expired = now
            .checked_sub(timestamp)
            .map_or(true, |delta| delta.unsigned_abs() > SIGNATURE_TOLERANCE_IN_SECONDS);
        if expired {
            return Err(CryptoError::ExpiredTimestamp { timestamp, now });
        }

        let encoded = self
            .signature
            .strip_prefix(SIGNATURE_VERSION)
            .and_then(|s| s.strip_prefix('='))
            .ok_or_else(|| CryptoError::InvalidSignatureFormat {
                sig: self.signature.to_string(),
            })?;
        let decoded_signature =
            hex::decode(encoded).map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: self.signature.to_string(),
            })?;

        Self::build_hmac(body, self.timestamp.trim(), secret)?
            .verify_slice(&decoded_signature)
            .map_err(|_| CryptoError::SignatureMismatch)
    }

    fn build_hmac(body: &[u8], timestamp: &str, secret: &str) -> Result<SimpleHmac<Sha256>> {
        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;

        hmac.update(SIGNATURE_VERSION.as_bytes());
        hmac.update(b":");
        hmac.update(timestamp.as_bytes());
        hmac.update(b":");
        hmac.update(body);
        Ok(hmac)
    }
}

/// Current UNIX timestamp, in seconds.
pub fn now_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
