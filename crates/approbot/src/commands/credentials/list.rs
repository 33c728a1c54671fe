use approbot_core::use_cases::credentials::ListDelegatedCredentials;
use clap::Parser;

use crate::{commands::CommandContext, Result};

/// List registered credentials
#[derive(Parser)]
pub(crate) struct CredentialsListCommand;

impl CredentialsListCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let credentials = ListDelegatedCredentials.run(&ctx.as_core_context()).await?;

        if credentials.is_empty() {
            writeln!(ctx.writer.write().await, "No credential found.")?;
        } else {
            writeln!(ctx.writer.write().await, "Credentials:")?;
            for credential in credentials {
                writeln!(
                    ctx.writer.write().await,
                    "- {} (GitHub: {})",
                    credential.slack_user_id,
                    credential.github_username
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use approbot_database_interface::DbService;
    use approbot_models::DelegatedCredential;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run_no_credentials() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();

        assert_eq!(
            test_command(ctx, &["credentials", "list"]).await,
            "No credential found.\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .delegated_credentials_create(DelegatedCredential::new("U2", "hubot", "ghp_two"))
            .await?;
        ctx.db_service
            .delegated_credentials_create(DelegatedCredential::new("U1", "octocat", "ghp_one"))
            .await?;

        assert_eq!(
            test_command(ctx, &["credentials", "list"]).await,
            "Credentials:\n- U1 (GitHub: octocat)\n- U2 (GitHub: hubot)\n"
        );

        Ok(())
    }
}
