//! Slack Api wrappers.

use approbot_config::Config;
use approbot_slack_api::SlackApiService;
use approbot_slack_interface::{types::SlackMessage, Result, SlackService};
use async_trait::async_trait;

use crate::metrics::SLACK_API_CALLS;

/// Slack Api Service with metrics.
pub struct MetricsSlackService {
    inner: SlackApiService,
}

impl MetricsSlackService {
    /// Creates a new service.
    pub fn new(config: Config) -> Self {
        Self {
            inner: SlackApiService::new(config),
        }
    }
}

#[async_trait]
impl SlackService for MetricsSlackService {
    async fn reactions_add(&self, channel: &str, timestamp: &str, name: &str) -> Result<()> {
        SLACK_API_CALLS.inc();
        self.inner.reactions_add(channel, timestamp, name).await
    }

    async fn conversations_history_get(
        &self,
        channel: &str,
        timestamp: &str,
    ) -> Result<Option<SlackMessage>> {
        SLACK_API_CALLS.inc();
        self.inner
            .conversations_history_get(channel, timestamp)
            .await
    }

    async fn conversations_open(&self, user: &str) -> Result<String> {
        SLACK_API_CALLS.inc();
        self.inner.conversations_open(user).await
    }

    async fn chat_post_message(&self, channel: &str, text: &str) -> Result<()> {
        SLACK_API_CALLS.inc();
        self.inner.chat_post_message(channel, text).await
    }
}
