use approbot_core::use_cases::credentials::RegisterDelegatedCredential;
use clap::Parser;

use crate::{commands::CommandContext, Result};

/// Register the GitHub credential of a Slack user
#[derive(Parser)]
pub(crate) struct CredentialsAddCommand {
    /// Slack user ID
    pub slack_user_id: String,
    /// GitHub username
    pub github_username: String,
    /// GitHub access token
    pub github_token: String,
}

impl CredentialsAddCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        RegisterDelegatedCredential
            .run(
                &ctx.as_core_context(),
                &self.slack_user_id,
                &self.github_username,
                &self.github_token,
            )
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Credential for Slack user '{}' added/edited, acting as GitHub user '{}'.",
            self.slack_user_id,
            self.github_username
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() {
        let ctx = CommandContextTest::new();

        assert_eq!(
            test_command(ctx, &["credentials", "add", "U1", "octocat", "ghp_token"]).await,
            "Credential for Slack user 'U1' added/edited, acting as GitHub user 'octocat'.\n"
        );
    }
}
