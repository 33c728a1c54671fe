//! Free-form chat text parsing.

mod mentions;
mod references;

pub use mentions::extract_mentions;
pub use references::extract_pull_request_references;
