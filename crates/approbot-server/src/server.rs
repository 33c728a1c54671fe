//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use approbot_config::Config;
use approbot_core::{CoreContext, CoreModule};
use approbot_database_interface::DbService;
use approbot_ghapi_interface::ApiService;
use approbot_lock_interface::LockService;
use approbot_slack_interface::SlackService;
use sentry_actix::Sentry;
use tracing::{info, warn};

use crate::{
    health::health_check_route, metrics::build_metrics_handler, middlewares::VerifySignature,
    webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// Credential store.
    pub db_service: Box<dyn DbService>,
    /// GitHub adapter.
    pub api_service: Box<dyn ApiService>,
    /// Slack adapter.
    pub slack_service: Box<dyn SlackService>,
    /// Lock adapter.
    pub lock_service: Box<dyn LockService>,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        db_service: Box<dyn DbService>,
        api_service: Box<dyn ApiService>,
        slack_service: Box<dyn SlackService>,
        lock_service: Box<dyn LockService>,
    ) -> Self {
        Self {
            config,
            core_module,
            db_service,
            api_service,
            slack_service,
            lock_service,
        }
    }

    /// Convert the context for the core module.
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

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(prometheus)
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .service(
            web::scope("/webhook")
                .wrap(VerifySignature::new(&context.config))
                .configure(configure_webhook_handlers),
        )
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on approbot!" }))
            }),
        )
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        trigger_emoji = context.config.slack.trigger_emoji,
        message = "Starting bot server",
    );

    if context.config.slack.allowed_channels.is_empty() {
        warn!("No allowed channel configured, every channel can trigger approvals. This can be a security concern.");
    }

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let prometheus = build_metrics_handler()?;
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}

#[cfg(test)]
pub(crate) mod tests {
    use actix_web::{http::StatusCode, test};
    use approbot_database_memory::MemoryDb;
    use approbot_ghapi_null::NullApiService;
    use approbot_lock_null::NullLockService;
    use approbot_slack_null::NullSlackService;
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) fn null_context(core_module: CoreModule) -> AppContext {
        let mut config = Config::from_env_no_version().unwrap();
        config.server.disable_webhook_signature = true;

        AppContext::new_with_adapters(
            config,
            core_module,
            Box::new(MemoryDb::new()),
            Box::new(NullApiService::new()),
            Box::new(NullSlackService::new()),
            Box::new(NullLockService::new()),
        )
    }

    #[::core::prelude::v1::test]
    fn bind_address() {
        let mut config = Config::from_env_no_version().unwrap();
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 1234;

        assert_eq!(get_bind_address(&config), "0.0.0.0:1234");
    }

    #[actix_web::test]
    async fn index() {
        let app = test::init_service(build_actix_app(
            Data::new(null_context(CoreModule::builder().build())),
            build_metrics_handler().unwrap(),
        ))
        .await;

        let response: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request())
                .await;

        assert_eq!(
            response,
            serde_json::json!({"message": "Welcome on approbot!"})
        );
    }

    #[actix_web::test]
    async fn health() {
        let app = test::init_service(build_actix_app(
            Data::new(null_context(CoreModule::builder().build())),
            build_metrics_handler().unwrap(),
        ))
        .await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!({"database": true, "lock": true}));
    }

    #[actix_web::test]
    async fn metrics_endpoint() {
        let app = test::init_service(build_actix_app(
            Data::new(null_context(CoreModule::builder().build())),
            build_metrics_handler().unwrap(),
        ))
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/metrics").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("github_api_calls"));
    }
}
