//! GitHub Api wrappers.

use approbot_config::Config;
use approbot_ghapi_github::GithubApiService;
use approbot_ghapi_interface::{types::GhReviewApi, ApiService, Result};
use async_trait::async_trait;

use crate::metrics::GITHUB_API_CALLS;

/// GitHub Api Service with metrics.
pub struct MetricsApiService {
    inner: GithubApiService,
}

impl MetricsApiService {
    /// Creates a new service.
    pub fn new(config: Config) -> Self {
        Self {
            inner: GithubApiService::new(config),
        }
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn pull_reviews_list(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        GITHUB_API_CALLS.inc();
        self.inner
            .pull_reviews_list(token, owner, name, number)
            .await
    }

    async fn pull_reviews_approve(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<()> {
        GITHUB_API_CALLS.inc();
        self.inner
            .pull_reviews_approve(token, owner, name, number)
            .await
    }
}
