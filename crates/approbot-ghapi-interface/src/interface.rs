use async_trait::async_trait;

use crate::{types::GhReviewApi, Result};

/// GitHub API service.
///
/// Every call is authenticated with the delegated token of the acting user.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List reviews of a pull request, oldest first.
    async fn pull_reviews_list(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<Vec<GhReviewApi>>;
    /// Submit an approving review on a pull request.
    async fn pull_reviews_approve(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<()>;
}
