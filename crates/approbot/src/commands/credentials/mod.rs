use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{
    add::CredentialsAddCommand, list::CredentialsListCommand, remove::CredentialsRemoveCommand,
};
use crate::{
    commands::{Command, CommandContext},
    Result,
};

mod add;
mod list;
mod remove;

/// Manage delegated GitHub credentials of Slack users
#[derive(Parser)]
pub(crate) struct CredentialsCommand {
    #[clap(subcommand)]
    inner: CredentialsSubCommand,
}

#[async_trait]
impl Command for CredentialsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum CredentialsSubCommand {
    Add(CredentialsAddCommand),
    List(CredentialsListCommand),
    Remove(CredentialsRemoveCommand),
}

#[async_trait]
impl Command for CredentialsSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Add(sub) => sub.run(ctx).await,
            Self::List(sub) => sub.run(ctx).await,
            Self::Remove(sub) => sub.run(ctx).await,
        }
    }
}
