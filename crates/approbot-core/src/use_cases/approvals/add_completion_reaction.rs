use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::debug;

use crate::{CoreContext, Result};

/// Add the trigger reaction on the source message. A reaction already there counts as success.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AddCompletionReactionInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, channel: &str, message_ts: &str) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = AddCompletionReactionInterface)]
pub(crate) struct AddCompletionReaction;

#[async_trait]
impl AddCompletionReactionInterface for AddCompletionReaction {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, channel: &str, message_ts: &str) -> Result<()> {
        match ctx
            .slack_service
            .reactions_add(channel, message_ts, &ctx.config.slack.trigger_emoji)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_already_reacted() => {
                debug!(channel = channel, message = "Completion reaction already present");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
