use async_trait::async_trait;

use crate::{types::SlackMessage, Result};

/// Slack Web API service, authenticated with the bot token.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SlackService: Send + Sync {
    /// Add a reaction to a message.
    async fn reactions_add(&self, channel: &str, timestamp: &str, name: &str) -> Result<()>;
    /// Fetch a single message from a conversation.
    async fn conversations_history_get(
        &self,
        channel: &str,
        timestamp: &str,
    ) -> Result<Option<SlackMessage>>;
    /// Open a direct message conversation, returning its channel ID.
    async fn conversations_open(&self, user: &str) -> Result<String>;
    /// Post a message to a conversation.
    async fn chat_post_message(&self, channel: &str, text: &str) -> Result<()>;
    /// Send a direct message to a user.
    async fn send_direct_message(&self, user: &str, text: &str) -> Result<()> {
        let channel = self.conversations_open(user).await?;
        self.chat_post_message(&channel, text).await
    }
}
