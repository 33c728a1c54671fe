//! Slack Web API adapter.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod slack;

pub use slack::SlackApiService;
