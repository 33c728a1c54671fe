//! GitHub adapter

use approbot_config::Config;
use approbot_ghapi_interface::{types::GhReviewApi, ApiError, ApiService, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const REVIEWS_PER_PAGE: u32 = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self, token: &str) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config, token)?
            .build()
            .map_err(GitHubError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self, token))]
    async fn pull_reviews_list(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        let response = self
            .get_client(token)?
            .get(&self.build_url(format!(
                "/repos/{owner}/{name}/pulls/{number}/reviews?per_page={REVIEWS_PER_PAGE}"
            )))
            .send()
            .await
            .map_err(GitHubError::from)?;

        Ok(check_response(response)
            .await?
            .json::<Vec<GhReviewApi>>()
            .await
            .map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn pull_reviews_approve(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            event: &'a str,
        }

        let response = self
            .get_client(token)?
            .post(&self.build_url(format!("/repos/{owner}/{name}/pulls/{number}/reviews")))
            .json(&Request { event: "APPROVE" })
            .send()
            .await
            .map_err(GitHubError::from)?;

        check_response(response).await?;
        Ok(())
    }
}

async fn check_response(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GitHubError::ResponseError {
        status: status.as_u16(),
        message: extract_error_message(&body),
    }
    .into())
}

/// Extract a readable message from a GitHub error payload.
fn extract_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ErrorDetail {
        Text(String),
        Object { message: Option<String> },
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
        #[serde(default)]
        errors: Vec<ErrorDetail>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(payload) => {
            let details: Vec<String> = payload
                .errors
                .into_iter()
                .filter_map(|e| match e {
                    ErrorDetail::Text(t) => Some(t),
                    ErrorDetail::Object { message } => message,
                })
                .collect();

            if details.is_empty() {
                payload.message
            } else {
                format!("{} ({})", payload.message, details.join(", "))
            }
        }
        Err(_) if body.is_empty() => "empty response".into(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_with_details() {
        assert_eq!(
            extract_error_message(
                r#"{"message":"Unprocessable Entity","errors":["Can not approve your own pull request"]}"#
            ),
            "Unprocessable Entity (Can not approve your own pull request)"
        );
        assert_eq!(
            extract_error_message(
                r#"{"message":"Validation Failed","errors":[{"resource":"PullRequestReview","message":"Pull request is closed"}]}"#
            ),
            "Validation Failed (Pull request is closed)"
        );
    }

    #[test]
    fn error_message_simple() {
        assert_eq!(
            extract_error_message(r#"{"message":"Bad credentials"}"#),
            "Bad credentials"
        );
        assert_eq!(extract_error_message("Not JSON"), "Not JSON");
        assert_eq!(extract_error_message(""), "empty response");
    }

    #[tokio::test]
    async fn unreachable_api_is_an_implementation_error() {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.github.root_url = "http://127.0.0.1:1".into();
        config.api.github.connect_timeout = 100;

        let service = GithubApiService::new(config);
        let result = service
            .pull_reviews_list("token", "acme", "widgets", 1)
            .await;

        assert!(matches!(
            result,
            Err(ApiError::ImplementationError { .. })
        ));
    }
}
