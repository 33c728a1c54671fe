//! Slack Web API interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
pub mod types;

pub use errors::{Result, SlackError};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockSlackService;
pub use interface::SlackService;
