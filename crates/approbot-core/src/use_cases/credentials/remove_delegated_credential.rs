use crate::{CoreContext, Result};

pub struct RemoveDelegatedCredential;

impl RemoveDelegatedCredential {
    /// Returns `false` when nothing was stored for this user.
    #[tracing::instrument(skip(self, ctx))]
    pub async fn run(&self, ctx: &CoreContext<'_>, slack_user_id: &str) -> Result<bool> {
        ctx.db_service
            .delegated_credentials_delete(slack_user_id)
            .await
            .map_err(Into::into)
    }
}
