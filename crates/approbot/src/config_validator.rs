//! Validation utilities.

use std::fmt::Write;

use approbot_config::{Config, DatabaseDriver, LockDriver, SlackDriver};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }
    if config.name.is_empty() {
        _missing(&mut error, "BOT_NAME");
    }

    // Check PG configuration
    if config.database.driver == DatabaseDriver::Postgres && config.database.pg.url.is_empty() {
        _missing(&mut error, "BOT_DATABASE_PG_URL");
    }

    // Check redis configuration
    if config.lock.driver == LockDriver::Redis && config.lock.redis.address.is_empty() {
        _missing(&mut error, "BOT_LOCK_REDIS_ADDRESS");
    }

    // Check Slack configuration
    if config.slack.trigger_emoji.is_empty() {
        _missing(&mut error, "BOT_SLACK_TRIGGER_EMOJI");
    }
    if config.slack.driver == SlackDriver::Slack {
        if config.slack.bot_token.is_empty() {
            _missing(&mut error, "BOT_SLACK_BOT_TOKEN");
        }
        if config.slack.bot_user_id.is_empty() {
            _missing(&mut error, "BOT_SLACK_BOT_USER_ID");
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
