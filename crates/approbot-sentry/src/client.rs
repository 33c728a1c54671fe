use std::{future::Future, str::FromStr};

use approbot_config::Config;
use sentry::{integrations::debug_images::DebugImagesIntegration, types::Dsn, ClientOptions};
use tracing::{info, warn};

fn build_client_options(config: &Config) -> Option<ClientOptions> {
    if config.sentry.url.is_empty() {
        return None;
    }

    let dsn = match Dsn::from_str(&config.sentry.url) {
        Ok(dsn) => dsn,
        Err(e) => {
            warn!(error = %e, message = "Invalid Sentry URL, Sentry integration disabled.");
            return None;
        }
    };

    let mut options = ClientOptions::new().add_integration(DebugImagesIntegration::default());
    options.dsn = Some(dsn);
    options.default_integrations = true;
    options.in_app_exclude.push("actix");
    options.in_app_exclude.push("sentry");
    options.in_app_exclude.push("tokio");
    options.release = Some(config.version.to_string().into());
    options.send_default_pii = false;
    options.attach_stacktrace = true;
    options.traces_sample_rate = config.sentry.traces_sample_rate;
    options.debug = false;
    Some(options)
}

/// Configure Sentry integration by wrapping a function.
pub async fn with_sentry_configuration<T, Fut, E>(config: &Config, func: T) -> Result<(), E>
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let _guard = build_client_options(config).map(|options| {
        info!("Sentry integration enabled.");

        // Enable backtraces
        std::env::set_var("RUST_BACKTRACE", "1");

        sentry::init(options)
    });

    func().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_url() {
        let mut config = Config::from_env_no_version().unwrap();
        config.sentry.url = String::new();
        assert!(build_client_options(&config).is_none());

        config.sentry.url = "not a dsn".into();
        assert!(build_client_options(&config).is_none());
    }

    #[test]
    fn enabled_with_url() {
        let mut config = Config::from_env_no_version().unwrap();
        config.sentry.url = "https://public@sentry.example.com/1".into();
        config.sentry.traces_sample_rate = 0.5;

        let options = build_client_options(&config).unwrap();
        assert!(options.dsn.is_some());
        assert_eq!(options.traces_sample_rate, 0.5);
    }

    #[tokio::test]
    async fn wraps_function() {
        let mut config = Config::from_env_no_version().unwrap();
        config.sentry.url = String::new();

        let result: Result<(), ()> = with_sentry_configuration(&config, || async { Ok(()) }).await;
        assert_eq!(result, Ok(()));
    }
}
