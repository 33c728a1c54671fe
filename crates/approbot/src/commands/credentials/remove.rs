use approbot_core::use_cases::credentials::RemoveDelegatedCredential;
use clap::Parser;

use crate::{commands::CommandContext, Result};

/// Remove the credential of a Slack user
#[derive(Parser)]
pub(crate) struct CredentialsRemoveCommand {
    /// Slack user ID
    pub slack_user_id: String,
}

impl CredentialsRemoveCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let removed = RemoveDelegatedCredential
            .run(&ctx.as_core_context(), &self.slack_user_id)
            .await?;

        if removed {
            writeln!(
                ctx.writer.write().await,
                "Credential for Slack user '{}' removed.",
                self.slack_user_id
            )?;
        } else {
            writeln!(
                ctx.writer.write().await,
                "No credential found for Slack user '{}'.",
                self.slack_user_id
            )?;
        }

        Ok(())
    }
}
