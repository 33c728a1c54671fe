//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
pub mod ghapi;
mod health;
mod metrics;
pub mod middlewares;
pub mod normalizer;
pub mod redis;
pub mod server;
pub mod slack;
mod webhook;

pub use errors::{Result, ServerError};
