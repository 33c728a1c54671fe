use approbot_config::Config;
use approbot_database_interface::DbService;
use approbot_ghapi_interface::ApiService;
use approbot_lock_interface::LockService;
use approbot_slack_interface::SlackService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub slack_service: &'a (dyn SlackService + 'a),
    pub db_service: &'a (dyn DbService + 'a),
    pub lock_service: &'a (dyn LockService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use approbot_config::Config;
    use approbot_database_memory::MemoryDb;
    use approbot_ghapi_interface::MockApiService;
    use approbot_lock_interface::MockLockService;
    use approbot_slack_interface::MockSlackService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub slack_service: MockSlackService,
        pub db_service: MemoryDb,
        pub lock_service: MockLockService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version().unwrap();
            config.slack.bot_user_id = "UBOT".into();
            config.slack.trigger_emoji = "white_check_mark".into();
            config.slack.allowed_channels = vec![];

            Self {
                config,
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                slack_service: MockSlackService::new(),
                db_service: MemoryDb::new(),
                lock_service: MockLockService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                slack_service: &self.slack_service,
                db_service: &self.db_service,
                lock_service: &self.lock_service,
            }
        }
    }
}
