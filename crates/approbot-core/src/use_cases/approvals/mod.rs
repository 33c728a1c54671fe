pub(crate) mod add_completion_reaction;
pub(crate) mod approve_pull_requests;
pub(crate) mod check_approval_state;

pub use add_completion_reaction::AddCompletionReactionInterface;
pub use approve_pull_requests::{ApprovalRequest, ApprovePullRequestsInterface};
pub use check_approval_state::CheckApprovalStateInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    add_completion_reaction::MockAddCompletionReactionInterface,
    approve_pull_requests::MockApprovePullRequestsInterface,
    check_approval_state::MockCheckApprovalStateInterface,
};
