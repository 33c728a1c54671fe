//! Domain models.

mod approval_outcome;
mod delegated_credential;
mod pull_request_handle;

pub use approval_outcome::{ApprovalOutcome, ApprovalRecord, ApprovalSummary};
pub use delegated_credential::DelegatedCredential;
pub use pull_request_handle::PullRequestHandle;
