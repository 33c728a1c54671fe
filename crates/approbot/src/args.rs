use std::sync::Arc;

use approbot_config::{ApiDriver, Config, DatabaseDriver, LockDriver, SlackDriver};
use approbot_core::CoreModule;
use approbot_database_interface::DbService;
use approbot_database_memory::MemoryDb;
use approbot_database_pg::{establish_pool_connection, run_migrations, PostgresDb};
use approbot_ghapi_interface::ApiService;
use approbot_ghapi_null::NullApiService;
use approbot_lock_interface::LockService;
use approbot_lock_null::NullLockService;
use approbot_sentry::with_sentry_configuration;
use approbot_server::{
    ghapi::MetricsApiService, redis::MetricsRedisService, slack::MetricsSlackService,
};
use approbot_slack_interface::SlackService;
use approbot_slack_null::NullSlackService;
use clap::Parser;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let ctx = Self::build_context(config.clone()).await?;

            with_sentry_configuration(&config, || async {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        actix_rt::System::with_tokio_rt(move || runtime).block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }

    async fn build_context(config: Config) -> Result<CommandContext> {
        let db_service: Box<dyn DbService> = {
            if config.database.driver == DatabaseDriver::Postgres {
                info!("Using PostgresDb database driver");

                let pool = establish_pool_connection(&config).await?;
                run_migrations(&pool).await?;

                Box::new(PostgresDb::new(pool))
            } else {
                info!("Using MemoryDb database driver");
                Box::new(MemoryDb::new())
            }
        };

        let api_service: Box<dyn ApiService> = {
            if config.api.driver == ApiDriver::GitHub {
                info!("Using MetricsApiService API driver");
                Box::new(MetricsApiService::new(config.clone()))
            } else {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        let slack_service: Box<dyn SlackService> = {
            if config.slack.driver == SlackDriver::Slack {
                info!("Using MetricsSlackService Slack driver");
                Box::new(MetricsSlackService::new(config.clone()))
            } else {
                info!("Using NullSlackService Slack driver");
                Box::new(NullSlackService::new())
            }
        };

        let lock_service: Box<dyn LockService> = {
            if config.lock.driver == LockDriver::Redis {
                info!("Using RedisLockService lock driver");
                Box::new(MetricsRedisService::new(&config.lock.redis.address)?)
            } else {
                info!("Using NullLockService lock driver");
                Box::new(NullLockService::new())
            }
        };

        Ok(CommandContext {
            config,
            db_service,
            api_service,
            slack_service,
            lock_service,
            core_module: CoreModule::builder().build(),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        })
    }
}
