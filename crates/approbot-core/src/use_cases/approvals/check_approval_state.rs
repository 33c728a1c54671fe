use approbot_ghapi_interface::types::{GhReviewApi, GhReviewStateApi};
use approbot_models::{DelegatedCredential, PullRequestHandle};
use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::warn;

use crate::CoreContext;

/// Is the latest review of the credential owner an approval.
///
/// A failed review query counts as "not approved", so that an approval is still attempted.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckApprovalStateInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        credential: &DelegatedCredential,
    ) -> bool;
}

#[derive(Component)]
#[shaku(interface = CheckApprovalStateInterface)]
pub(crate) struct CheckApprovalState;

#[async_trait]
impl CheckApprovalStateInterface for CheckApprovalState {
    #[tracing::instrument(
        skip(self, ctx, credential),
        fields(
            pr_handle = %pr_handle,
            github_username = credential.github_username
        ),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        credential: &DelegatedCredential,
    ) -> bool {
        match ctx
            .api_service
            .pull_reviews_list(
                &credential.github_token,
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
            )
            .await
        {
            Ok(reviews) => Self::is_approved_by(&reviews, &credential.github_username),
            Err(e) => {
                warn!(
                    pr_handle = %pr_handle,
                    error = %e,
                    message = "Could not fetch reviews, assuming not approved"
                );
                false
            }
        }
    }
}

impl CheckApprovalState {
    fn is_approved_by(reviews: &[GhReviewApi], username: &str) -> bool {
        reviews
            .iter()
            .rev()
            .find(|r| r.user.login.eq_ignore_ascii_case(username))
            .is_some_and(|r| r.state == GhReviewStateApi::Approved)
    }
}
