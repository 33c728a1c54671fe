use approbot_models::DelegatedCredential;

use crate::{CoreContext, Result};

pub struct ListDelegatedCredentials;

impl ListDelegatedCredentials {
    #[tracing::instrument(skip(self, ctx))]
    pub async fn run(&self, ctx: &CoreContext<'_>) -> Result<Vec<DelegatedCredential>> {
        ctx.db_service
            .delegated_credentials_all()
            .await
            .map_err(Into::into)
    }
}
