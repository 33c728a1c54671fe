use approbot_models::ApprovalSummary;
use approbot_slack_interface::types::{SlackReactionAddedEvent, SlackReactionItem};
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::{debug, info};

use crate::{
    parsing::extract_pull_request_references,
    use_cases::approvals::{ApprovalRequest, ApprovePullRequestsInterface},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleReactionEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: SlackReactionAddedEvent,
    ) -> Result<ApprovalSummary>;
}

#[derive(Component)]
#[shaku(interface = HandleReactionEventInterface)]
pub(crate) struct HandleReactionEvent;

#[async_trait]
impl HandleReactionEventInterface for HandleReactionEvent {
    #[tracing::instrument(
        skip_all,
        fields(user = event.user, reaction = event.reaction)
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: SlackReactionAddedEvent,
    ) -> Result<ApprovalSummary> {
        if event.user == ctx.config.slack.bot_user_id {
            debug!(message = "Ignoring own reaction");
            return Ok(ApprovalSummary::new());
        }

        if event.reaction != ctx.config.slack.trigger_emoji {
            return Ok(ApprovalSummary::new());
        }

        let (channel, message_ts) = match event.item {
            SlackReactionItem::Message { channel, ts } => (channel, ts),
            SlackReactionItem::Unsupported => {
                debug!(message = "Ignoring reaction on a non-message item");
                return Ok(ApprovalSummary::new());
            }
        };

        if !ctx.config.is_channel_allowed(&channel) {
            info!(channel = channel, message = "Ignoring reaction in a channel not allowed");
            return Ok(ApprovalSummary::new());
        }

        let message = match ctx
            .slack_service
            .conversations_history_get(&channel, &message_ts)
            .await?
        {
            Some(message) => message,
            None => {
                info!(
                    channel = channel,
                    message_ts = message_ts,
                    message = "Reacted message not found"
                );
                return Ok(ApprovalSummary::new());
            }
        };

        let references = extract_pull_request_references(&message.text);
        if references.is_empty() {
            debug!(message = "No pull request reference in reacted message");
            return Ok(ApprovalSummary::new());
        }

        let approve_pull_requests: &dyn ApprovePullRequestsInterface =
            ctx.core_module.resolve_ref();
        Ok(approve_pull_requests
            .run(
                ctx,
                &ApprovalRequest {
                    channel,
                    message_ts,
                    requester: event.user.clone(),
                    identities: vec![event.user],
                    references,
                },
            )
            .await)
    }
}
