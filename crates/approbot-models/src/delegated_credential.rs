/// Per-user credential, used to act on GitHub on behalf of a Slack user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DelegatedCredential {
    /// Slack user ID.
    pub slack_user_id: String,
    /// GitHub access token.
    pub github_token: String,
    /// GitHub login.
    pub github_username: String,
}

impl DelegatedCredential {
    pub fn new(slack_user_id: &str, github_username: &str, github_token: &str) -> Self {
        Self {
            slack_user_id: slack_user_id.into(),
            github_token: github_token.into(),
            github_username: github_username.into(),
        }
    }
}

// Token stays out of logs.
impl std::fmt::Debug for DelegatedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatedCredential")
            .field("slack_user_id", &self.slack_user_id)
            .field("github_username", &self.github_username)
            .finish_non_exhaustive()
    }
}
