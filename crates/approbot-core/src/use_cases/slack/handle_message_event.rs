use approbot_models::ApprovalSummary;
use approbot_slack_interface::types::SlackMessageEvent;
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::{debug, info};

use crate::{
    parsing::{extract_mentions, extract_pull_request_references},
    use_cases::approvals::{ApprovalRequest, ApprovePullRequestsInterface},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleMessageEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: SlackMessageEvent)
        -> Result<ApprovalSummary>;
}

#[derive(Component)]
#[shaku(interface = HandleMessageEventInterface)]
pub(crate) struct HandleMessageEvent;

#[async_trait]
impl HandleMessageEventInterface for HandleMessageEvent {
    #[tracing::instrument(
        skip_all,
        fields(channel = event.channel, user = ?event.user, subtype = ?event.subtype)
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: SlackMessageEvent,
    ) -> Result<ApprovalSummary> {
        if event.subtype.is_some() {
            return Ok(ApprovalSummary::new());
        }

        let author = match event.user {
            Some(user) if user != ctx.config.slack.bot_user_id => user,
            _ => return Ok(ApprovalSummary::new()),
        };

        if !ctx.config.is_channel_allowed(&event.channel) {
            debug!(message = "Ignoring message in a channel not allowed");
            return Ok(ApprovalSummary::new());
        }

        let identities: Vec<String> = extract_mentions(&event.text)
            .into_iter()
            .filter(|m| m != &ctx.config.slack.bot_user_id)
            .collect();
        if identities.is_empty() {
            return Ok(ApprovalSummary::new());
        }

        let references = extract_pull_request_references(&event.text);
        if references.is_empty() {
            return Ok(ApprovalSummary::new());
        }

        info!(
            identities = ?identities,
            references = references.len(),
            message = "Approval requested by mention"
        );

        let approve_pull_requests: &dyn ApprovePullRequestsInterface =
            ctx.core_module.resolve_ref();
        Ok(approve_pull_requests
            .run(
                ctx,
                &ApprovalRequest {
                    channel: event.channel,
                    message_ts: event.ts,
                    requester: author,
                    identities,
                    references,
                },
            )
            .await)
    }
}
