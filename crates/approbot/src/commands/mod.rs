//! Commands.

use std::{io::Write, sync::Arc};

use approbot_config::Config;
use approbot_core::{CoreContext, CoreModule};
use approbot_database_interface::DbService;
use approbot_ghapi_interface::ApiService;
use approbot_lock_interface::LockService;
use approbot_slack_interface::SlackService;
use async_trait::async_trait;
use clap::Subcommand;
use tokio::sync::RwLock;

use self::{credentials::CredentialsCommand, server::ServerCommand};
use crate::Result;

mod credentials;
mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub db_service: Box<dyn DbService>,
    pub api_service: Box<dyn ApiService>,
    pub slack_service: Box<dyn SlackService>,
    pub lock_service: Box<dyn LockService>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            slack_service: self.slack_service.as_ref(),
            db_service: self.db_service.as_ref(),
            lock_service: self.lock_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Credentials(CredentialsCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Credentials(sub) => sub.execute(ctx).await,
        }
    }
}
