//! Slack adapter

use std::time::Duration;

use approbot_config::Config;
use approbot_slack_interface::{types::SlackMessage, Result, SlackError, SlackService};
use async_trait::async_trait;
use http::{header, HeaderMap};
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::SlackApiError;

/// Common envelope of every Slack Web API answer.
#[derive(Deserialize)]
struct Envelope<T> {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    data: Option<T>,
}

impl<T> Envelope<T> {
    fn into_result(self, method: &str) -> Result<Option<T>> {
        if self.ok {
            Ok(self.data)
        } else {
            Err(SlackError::api_error(
                method,
                self.error.as_deref().unwrap_or("unknown_error"),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct Empty {}

/// Slack Web API adapter implementation, using the bot token.
#[derive(Clone)]
pub struct SlackApiService {
    config: Config,
}

impl SlackApiService {
    /// Creates new Slack API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, SlackApiError> {
        let mut headers = HeaderMap::new();
        let mut auth_value =
            header::HeaderValue::from_str(&format!("Bearer {}", self.config.slack.bot_token))
                .map_err(|_| SlackApiError::InvalidTokenError)?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        ClientBuilder::new()
            .connect_timeout(Duration::from_millis(self.config.slack.connect_timeout))
            .user_agent(format!("approbot/{}", self.config.version))
            .default_headers(headers)
            .build()
            .map_err(SlackApiError::from)
    }

    fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.config.slack.root_url, method)
    }

    async fn call<T: DeserializeOwned + Send>(
        &self,
        method: &str,
        request: RequestBuilder,
    ) -> Result<Option<T>> {
        let response = request.send().await.map_err(SlackApiError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SlackApiError::StatusError {
                status: status.as_u16(),
            }
            .into());
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(SlackApiError::from)?
            .into_result(method)
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<Option<T>> {
        let request = self.get_client()?.post(self.build_url(method)).json(body);
        self.call(method, request).await
    }
}

#[async_trait]
impl SlackService for SlackApiService {
    #[tracing::instrument(skip(self))]
    async fn reactions_add(&self, channel: &str, timestamp: &str, name: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            channel: &'a str,
            timestamp: &'a str,
            name: &'a str,
        }

        self.post_json::<_, Empty>(
            "reactions.add",
            &Request {
                channel,
                timestamp,
                name,
            },
        )
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn conversations_history_get(
        &self,
        channel: &str,
        timestamp: &str,
    ) -> Result<Option<SlackMessage>> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            messages: Vec<SlackMessage>,
        }

        let request = self
            .get_client()?
            .get(self.build_url("conversations.history"))
            .query(&[
                ("channel", channel),
                ("latest", timestamp),
                ("inclusive", "true"),
                ("limit", "1"),
            ]);

        Ok(self
            .call::<Response>("conversations.history", request)
            .await?
            .and_then(|r| r.messages.into_iter().find(|m| m.ts == timestamp)))
    }

    #[tracing::instrument(skip(self))]
    async fn conversations_open(&self, user: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Request<'a> {
            users: &'a str,
        }

        #[derive(Deserialize)]
        struct Channel {
            id: String,
        }

        #[derive(Deserialize)]
        struct Response {
            channel: Channel,
        }

        self.post_json::<_, Response>("conversations.open", &Request { users: user })
            .await?
            .map(|r| r.channel.id)
            .ok_or_else(|| SlackError::api_error("conversations.open", "missing_channel"))
    }

    #[tracing::instrument(skip(self, text))]
    async fn chat_post_message(&self, channel: &str, text: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            channel: &'a str,
            text: &'a str,
        }

        self.post_json::<_, Empty>("chat.postMessage", &Request { channel, text })
            .await?;
        Ok(())
    }
}
