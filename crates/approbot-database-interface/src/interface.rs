use approbot_models::DelegatedCredential;
use async_trait::async_trait;

use crate::{DatabaseError, Result};

/// Delegated credential store, keyed by Slack user ID.
#[async_trait]
pub trait DbService: Send + Sync {
    /// Store a credential, replacing the existing one for the same user.
    async fn delegated_credentials_create(
        &self,
        instance: DelegatedCredential,
    ) -> Result<DelegatedCredential>;
    async fn delegated_credentials_get(
        &self,
        slack_user_id: &str,
    ) -> Result<Option<DelegatedCredential>>;
    async fn delegated_credentials_get_expect(
        &self,
        slack_user_id: &str,
    ) -> Result<DelegatedCredential> {
        self.delegated_credentials_get(slack_user_id)
            .await?
            .ok_or_else(|| DatabaseError::UnknownDelegatedCredential(slack_user_id.into()))
    }
    async fn delegated_credentials_delete(&self, slack_user_id: &str) -> Result<bool>;
    async fn delegated_credentials_all(&self) -> Result<Vec<DelegatedCredential>>;
    async fn health_check(&self) -> Result<()>;
}
