//! Core module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod parsing;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    approvals::{
        add_completion_reaction::AddCompletionReaction,
        approve_pull_requests::ApprovePullRequests, check_approval_state::CheckApprovalState,
    },
    notifications::notify_user::NotifyUser,
    slack::{
        handle_message_event::HandleMessageEvent, handle_reaction_event::HandleReactionEvent,
        handle_slack_event::HandleSlackEvent,
    },
};

module! {
    pub CoreModule {
        components = [
            AddCompletionReaction, ApprovePullRequests, CheckApprovalState,
            NotifyUser, HandleMessageEvent, HandleReactionEvent,
            HandleSlackEvent
        ],
        providers = []
    }
}
