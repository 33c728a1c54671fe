use approbot_models::{ApprovalOutcome, ApprovalSummary, DelegatedCredential, PullRequestHandle};
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::{error, info, warn};

use super::{AddCompletionReactionInterface, CheckApprovalStateInterface};
use crate::{
    use_cases::notifications::{
        messages::{approval_failed_message, onboarding_message},
        NotifyUserInterface,
    },
    CoreContext,
};

/// Approval request built from a Slack trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRequest {
    /// Channel of the source message.
    pub channel: String,
    /// Timestamp of the source message.
    pub message_ts: String,
    /// User notified about failures.
    pub requester: String,
    /// Users approving, in order.
    pub identities: Vec<String>,
    /// Pull requests to approve, without duplicates.
    pub references: Vec<PullRequestHandle>,
}

/// Approve each pull request once per identity, then signal completion on the source message
/// if at least one approval succeeded.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApprovePullRequestsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, request: &ApprovalRequest) -> ApprovalSummary;
}

#[derive(Component)]
#[shaku(interface = ApprovePullRequestsInterface)]
pub(crate) struct ApprovePullRequests;

#[async_trait]
impl ApprovePullRequestsInterface for ApprovePullRequests {
    #[tracing::instrument(
        skip_all,
        fields(
            channel = request.channel,
            message_ts = request.message_ts,
            requester = request.requester,
            identities = ?request.identities,
            references = request.references.len()
        )
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, request: &ApprovalRequest) -> ApprovalSummary {
        let notify_user: &dyn NotifyUserInterface = ctx.core_module.resolve_ref();
        let mut summary = ApprovalSummary::new();

        for identity in &request.identities {
            let credential = match ctx.db_service.delegated_credentials_get(identity).await {
                Ok(Some(credential)) => credential,
                Ok(None) => {
                    info!(
                        slack_user_id = identity,
                        message = "Missing delegated credential, asking for onboarding"
                    );
                    notify_user
                        .run(ctx, identity, &onboarding_message(ctx.config))
                        .await;
                    continue;
                }
                Err(e) => {
                    error!(
                        slack_user_id = identity,
                        error = %e,
                        message = "Could not fetch delegated credential"
                    );
                    for pr_handle in &request.references {
                        summary.push(
                            identity,
                            pr_handle,
                            ApprovalOutcome::Failed {
                                reason: "credential lookup failed".into(),
                            },
                        );
                    }
                    continue;
                }
            };

            for pr_handle in &request.references {
                let outcome = self.approve(ctx, &credential, pr_handle).await;
                if let ApprovalOutcome::Failed { reason } = &outcome {
                    notify_user
                        .run(
                            ctx,
                            &request.requester,
                            &approval_failed_message(pr_handle, &credential.github_username, reason),
                        )
                        .await;
                }

                summary.push(identity, pr_handle, outcome);
            }
        }

        if summary.has_success() {
            let add_completion_reaction: &dyn AddCompletionReactionInterface =
                ctx.core_module.resolve_ref();
            if let Err(e) = add_completion_reaction
                .run(ctx, &request.channel, &request.message_ts)
                .await
            {
                warn!(error = %e, message = "Could not add completion reaction");
            }
        }

        summary
    }
}

impl ApprovePullRequests {
    async fn approve(
        &self,
        ctx: &CoreContext<'_>,
        credential: &DelegatedCredential,
        pr_handle: &PullRequestHandle,
    ) -> ApprovalOutcome {
        let check_approval_state: &dyn CheckApprovalStateInterface = ctx.core_module.resolve_ref();
        if check_approval_state.run(ctx, pr_handle, credential).await {
            info!(
                pr_handle = %pr_handle,
                github_username = credential.github_username,
                message = "Pull request already approved, skipping"
            );
            return ApprovalOutcome::AlreadyApproved;
        }

        match ctx
            .api_service
            .pull_reviews_approve(
                &credential.github_token,
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
            )
            .await
        {
            Ok(()) => {
                info!(
                    pr_handle = %pr_handle,
                    github_username = credential.github_username,
                    message = "Pull request approved"
                );
                ApprovalOutcome::Approved
            }
            Err(e) => {
                warn!(
                    pr_handle = %pr_handle,
                    github_username = credential.github_username,
                    error = %e,
                    message = "Could not approve pull request"
                );
                ApprovalOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approbot_database_interface::DbService;
    use approbot_ghapi_interface::ApiError;
    use approbot_slack_interface::SlackError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            approvals::{MockAddCompletionReactionInterface, MockCheckApprovalStateInterface},
            notifications::MockNotifyUserInterface,
        },
        CoreModule, DomainError,
    };

    fn request(identities: &[&str], references: &[(&str, &str, u64)]) -> ApprovalRequest {
        ApprovalRequest {
            channel: "C1".into(),
            message_ts: "1.2".into(),
            requester: "UREQ".into(),
            identities: identities.iter().map(|&i| i.into()).collect(),
            references: references.iter().map(|&r| r.into()).collect(),
        }
    }

    async fn register(ctx: &CoreContextTest, slack_user_id: &str, github_username: &str) {
        ctx.db_service
            .delegated_credentials_create(DelegatedCredential::new(
                slack_user_id,
                github_username,
                &format!("token-{github_username}"),
            ))
            .await
            .unwrap();
    }

    fn not_approved_checker(times: usize) -> MockCheckApprovalStateInterface {
        let mut check_approval_state = MockCheckApprovalStateInterface::new();
        check_approval_state
            .expect_run()
            .times(times)
            .returning(|_, _, _| false);
        check_approval_state
    }

    fn reaction_expected(times: usize) -> MockAddCompletionReactionInterface {
        let mut add_completion_reaction = MockAddCompletionReactionInterface::new();
        add_completion_reaction
            .expect_run()
            .times(times)
            .withf(|_, channel, ts| channel == "C1" && ts == "1.2")
            .returning(|_, _, _| Ok(()));
        add_completion_reaction
    }

    #[tokio::test]
    async fn run_two_identities_one_reference() {
        let mut ctx = CoreContextTest::new();
        register(&ctx, "U1", "alice").await;
        register(&ctx, "U2", "bob").await;

        ctx.api_service
            .expect_pull_reviews_approve()
            .once()
            .withf(|token, owner, name, number| {
                token == "token-alice" && owner == "acme" && name == "widgets" && number == &42
            })
            .return_once(|_, _, _, _| Ok(()));
        ctx.api_service
            .expect_pull_reviews_approve()
            .once()
            .withf(|token, _, _, _| token == "token-bob")
            .return_once(|_, _, _, _| Ok(()));

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CheckApprovalStateInterface>(Box::new(
                not_approved_checker(2),
            ))
            .with_component_override::<dyn AddCompletionReactionInterface>(Box::new(
                reaction_expected(1),
            ))
            .build();

        let summary = ApprovePullRequests
            .run(
                &ctx.as_context(),
                &request(&["U1", "U2"], &[("acme", "widgets", 42)]),
            )
            .await;

        let mut expected = ApprovalSummary::new();
        expected.push("U1", &("acme", "widgets", 42).into(), ApprovalOutcome::Approved);
        expected.push("U2", &("acme", "widgets", 42).into(), ApprovalOutcome::Approved);
        assert_eq!(summary, expected);
    }

    #[tokio::test]
    async fn run_already_approved_skips_approval() {
        let mut ctx = CoreContextTest::new();
        register(&ctx, "U1", "alice").await;

        let mut check_approval_state = MockCheckApprovalStateInterface::new();
        check_approval_state
            .expect_run()
            .once()
            .withf(|_, pr_handle, credential| {
                pr_handle == &("acme", "widgets", 42).into()
                    && credential.github_username == "alice"
            })
            .return_once(|_, _, _| true);

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CheckApprovalStateInterface>(Box::new(
                check_approval_state,
            ))
            .with_component_override::<dyn AddCompletionReactionInterface>(Box::new(
                reaction_expected(1),
            ))
            .build();

        let summary = ApprovePullRequests
            .run(&ctx.as_context(), &request(&["U1"], &[("acme", "widgets", 42)]))
            .await;

        assert_eq!(
            summary.records()[0].outcome,
            ApprovalOutcome::AlreadyApproved
        );
    }

    #[tokio::test]
    async fn run_all_failed_emits_no_reaction() {
        let mut ctx = CoreContextTest::new();
        register(&ctx, "U1", "alice").await;

        ctx.api_service
            .expect_pull_reviews_approve()
            .times(2)
            .returning(|_, _, _, _| {
                Err(ApiError::ResponseError {
                    status: 422,
                    message: "Pull request is closed".into(),
                })
            });

        let mut notify_user = MockNotifyUserInterface::new();
        notify_user
            .expect_run()
            .times(2)
            .withf(|_, user, text| user == "UREQ" && text.contains("Pull request is closed"))
            .returning(|_, _, _| ());

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CheckApprovalStateInterface>(Box::new(
                not_approved_checker(2),
            ))
            .with_component_override::<dyn NotifyUserInterface>(Box::new(notify_user))
            .with_component_override::<dyn AddCompletionReactionInterface>(Box::new(
                reaction_expected(0),
            ))
            .build();

        let summary = ApprovePullRequests
            .run(
                &ctx.as_context(),
                &request(&["U1"], &[("acme", "widgets", 1), ("acme", "widgets", 2)]),
            )
            .await;

        assert!(!summary.has_success());
        assert_eq!(summary.records().len(), 2);
    }

    #[tokio::test]
    async fn run_partial_failure_continues() {
        let mut ctx = CoreContextTest::new();
        register(&ctx, "U1", "alice").await;

        ctx.api_service
            .expect_pull_reviews_approve()
            .once()
            .withf(|_, _, _, number| number == &1)
            .return_once(|_, _, _, _| {
                Err(ApiError::ResponseError {
                    status: 422,
                    message: "Can not approve your own pull request".into(),
                })
            });
        ctx.api_service
            .expect_pull_reviews_approve()
            .once()
            .withf(|_, _, _, number| number == &2)
            .return_once(|_, _, _, _| Ok(()));

        let mut notify_user = MockNotifyUserInterface::new();
        notify_user
            .expect_run()
            .once()
            .withf(|_, user, text| user == "UREQ" && text.contains("acme/widgets#1"))
            .return_once(|_, _, _| ());

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CheckApprovalStateInterface>(Box::new(
                not_approved_checker(2),
            ))
            .with_component_override::<dyn NotifyUserInterface>(Box::new(notify_user))
            .with_component_override::<dyn AddCompletionReactionInterface>(Box::new(
                reaction_expected(1),
            ))
            .build();

        let summary = ApprovePullRequests
            .run(
                &ctx.as_context(),
                &request(&["U1"], &[("acme", "widgets", 1), ("acme", "widgets", 2)]),
            )
            .await;

        assert_eq!(
            summary.count(|o| matches!(o, ApprovalOutcome::Failed { .. })),
            1
        );
        assert_eq!(summary.count(|o| o == &ApprovalOutcome::Approved), 1);
    }

    #[tokio::test]
    async fn run_missing_credential_asks_for_onboarding() {
        let mut ctx = CoreContextTest::new();
        register(&ctx, "U2", "bob").await;

        ctx.api_service
            .expect_pull_reviews_approve()
            .once()
            .withf(|token, _, _, _| token == "token-bob")
            .return_once(|_, _, _, _| Ok(()));

        let mut notify_user = MockNotifyUserInterface::new();
        notify_user
            .expect_run()
            .once()
            .withf(|_, user, text| user == "U1" && text.contains("GitHub credential"))
            .return_once(|_, _, _| ());

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CheckApprovalStateInterface>(Box::new(
                not_approved_checker(1),
            ))
            .with_component_override::<dyn NotifyUserInterface>(Box::new(notify_user))
            .with_component_override::<dyn AddCompletionReactionInterface>(Box::new(
                reaction_expected(1),
            ))
            .build();

        let summary = ApprovePullRequests
            .run(
                &ctx.as_context(),
                &request(&["U1", "U2"], &[("acme", "widgets", 42)]),
            )
            .await;

        assert_eq!(summary.records().len(), 1);
        assert_eq!(summary.records()[0].slack_user_id, "U2");
    }

    #[tokio::test]
    async fn run_completion_reaction_failure_is_logged() {
        let mut ctx = CoreContextTest::new();
        register(&ctx, "U1", "alice").await;

        ctx.api_service
            .expect_pull_reviews_approve()
            .once()
            .return_once(|_, _, _, _| Ok(()));

        let mut add_completion_reaction = MockAddCompletionReactionInterface::new();
        add_completion_reaction
            .expect_run()
            .once()
            .return_once(|_, _, _| {
                Err(DomainError::SlackError {
                    source: SlackError::api_error("reactions.add", "missing_scope"),
                })
            });

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CheckApprovalStateInterface>(Box::new(
                not_approved_checker(1),
            ))
            .with_component_override::<dyn AddCompletionReactionInterface>(Box::new(
                add_completion_reaction,
            ))
            .build();

        let summary = ApprovePullRequests
            .run(&ctx.as_context(), &request(&["U1"], &[("acme", "widgets", 42)]))
            .await;

        assert!(summary.has_success());
    }
}
