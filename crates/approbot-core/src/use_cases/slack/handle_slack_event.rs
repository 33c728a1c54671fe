use std::time::Duration;

use approbot_lock_interface::LockStatus;
use approbot_models::ApprovalSummary;
use approbot_slack_interface::types::SlackEvent;
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::{info, warn};

use super::{HandleMessageEventInterface, HandleReactionEventInterface};
use crate::{CoreContext, Result};

/// Dispatch an `event_callback` payload, once per delivery ID.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleSlackEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event_id: &str,
        event: SlackEvent,
    ) -> Result<ApprovalSummary>;
}

#[derive(Component)]
#[shaku(interface = HandleSlackEventInterface)]
pub(crate) struct HandleSlackEvent;

#[async_trait]
impl HandleSlackEventInterface for HandleSlackEvent {
    #[tracing::instrument(skip(self, ctx, event))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event_id: &str,
        event: SlackEvent,
    ) -> Result<ApprovalSummary> {
        if !self.claim_event(ctx, event_id).await {
            info!(event_id = event_id, message = "Event already handled, skipping");
            return Ok(ApprovalSummary::new());
        }

        match event {
            SlackEvent::ReactionAdded(event) => {
                let handle_reaction_event: &dyn HandleReactionEventInterface =
                    ctx.core_module.resolve_ref();
                handle_reaction_event.run(ctx, event).await
            }
            SlackEvent::Message(event) => {
                let handle_message_event: &dyn HandleMessageEventInterface =
                    ctx.core_module.resolve_ref();
                handle_message_event.run(ctx, event).await
            }
            SlackEvent::Unsupported => Ok(ApprovalSummary::new()),
        }
    }
}

impl HandleSlackEvent {
    async fn claim_event(&self, ctx: &CoreContext<'_>, event_id: &str) -> bool {
        if event_id.is_empty() {
            return true;
        }

        match ctx
            .lock_service
            .try_lock_resource(
                &format!("slack-event-{event_id}"),
                Duration::from_secs(ctx.config.lock.event_expiration),
            )
            .await
        {
            Ok(LockStatus::SuccessfullyLocked) => true,
            Ok(LockStatus::AlreadyLocked) => false,
            Err(e) => {
                warn!(
                    event_id = event_id,
                    error = %e,
                    message = "Could not mark event as seen, handling it anyway"
                );
                true
            }
        }
    }
}
