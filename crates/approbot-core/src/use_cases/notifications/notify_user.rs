use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::warn;

use crate::CoreContext;

/// Send a direct message to a user. Delivery failures are only logged.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait NotifyUserInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, slack_user_id: &str, text: &str);
}

#[derive(Component)]
#[shaku(interface = NotifyUserInterface)]
pub(crate) struct NotifyUser;

#[async_trait]
impl NotifyUserInterface for NotifyUser {
    #[tracing::instrument(skip(self, ctx, text))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, slack_user_id: &str, text: &str) {
        if let Err(e) = ctx
            .slack_service
            .send_direct_message(slack_user_id, text)
            .await
        {
            warn!(
                slack_user_id = slack_user_id,
                error = %e,
                message = "Could not notify user"
            );
        }
    }
}
