use approbot_config::Config;
use approbot_models::PullRequestHandle;

pub(crate) fn onboarding_message(config: &Config) -> String {
    format!(
        "I was asked to approve pull requests on your behalf, but I do not have a GitHub credential for you yet.\n\
        Please ask an administrator of *{}* to register one, then try again.",
        config.name
    )
}

pub(crate) fn approval_failed_message(
    pr_handle: &PullRequestHandle,
    github_username: &str,
    reason: &str,
) -> String {
    format!(":warning: Could not approve *{pr_handle}* as *{github_username}*: {reason}")
}
