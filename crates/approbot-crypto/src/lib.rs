//! Crypto module.

mod errors;
mod sig;

pub use self::{
    errors::{CryptoError, Result},
    sig::{now_timestamp, SlackSignature, SIGNATURE_TOLERANCE_IN_SECONDS, SIGNATURE_VERSION},
};
