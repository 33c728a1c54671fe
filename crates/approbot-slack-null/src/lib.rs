//! Null driver for Slack.

#![warn(missing_docs)]
#![warn(clippy::all)]

use approbot_slack_interface::{types::SlackMessage, Result, SlackService};
use async_trait::async_trait;

/// Null Slack service.
#[derive(Clone, Default)]
pub struct NullSlackService {
    _private: (),
}

impl NullSlackService {
    /// Build a null Slack service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl SlackService for NullSlackService {
    #[tracing::instrument(skip(self))]
    async fn reactions_add(&self, channel: &str, timestamp: &str, name: &str) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn conversations_history_get(
        &self,
        channel: &str,
        timestamp: &str,
    ) -> Result<Option<SlackMessage>> {
        Ok(None)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn conversations_open(&self, user: &str) -> Result<String> {
        Ok(user.into())
    }

    #[tracing::instrument(skip(self, text))]
    async fn chat_post_message(&self, channel: &str, text: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn never_finds_messages() {
        let service = NullSlackService::new();
        assert_eq!(
            service.conversations_history_get("C1", "1.2").await.unwrap(),
            None
        );
        service.send_direct_message("U1", "hello").await.unwrap();
    }
}
