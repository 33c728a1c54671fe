use approbot_models::DelegatedCredential;

use crate::{CoreContext, Result};

pub struct RegisterDelegatedCredential;

impl RegisterDelegatedCredential {
    /// Store a credential for a Slack user, replacing any previous one.
    #[tracing::instrument(skip(self, ctx, github_token))]
    pub async fn run(
        &self,
        ctx: &CoreContext<'_>,
        slack_user_id: &str,
        github_username: &str,
        github_token: &str,
    ) -> Result<DelegatedCredential> {
        ctx.db_service
            .delegated_credentials_create(DelegatedCredential::new(
                slack_user_id,
                github_username,
                github_token,
            ))
            .await
            .map_err(Into::into)
    }
}
