//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DatabaseDriver, DriverError, LockDriver, SlackDriver};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database driver.
    pub driver: DatabaseDriver,
    /// Postgres options.
    pub pg: DatabasePgConfig,
}

#[derive(Debug, Clone)]
pub struct DatabasePgConfig {
    /// Database URL.
    pub url: String,
    /// Database pool size.
    pub pool_size: u32,
    /// Database connection timeout (in seconds)
    pub connection_timeout: u32,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout.
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
}

#[derive(Debug, Clone)]
pub struct SlackConfig {
    /// Slack driver.
    pub driver: SlackDriver,
    /// Slack Web API root URL.
    pub root_url: String,
    /// Slack Web API connect timeout.
    pub connect_timeout: u64,
    /// Bot token used for reactions, history and messages.
    pub bot_token: String,
    /// Bot user ID, used to ignore our own events.
    pub bot_user_id: String,
    /// Request signing secret.
    pub signing_secret: String,
    /// Reaction name triggering approvals.
    pub trigger_emoji: String,
    /// Channels allowed to trigger approvals. Empty means every channel.
    pub allowed_channels: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LockConfig {
    /// Lock driver.
    pub driver: LockDriver,
    /// Redis options.
    pub redis: LockRedisConfig,
    /// How long a delivered event stays marked as seen (in seconds).
    pub event_expiration: u64,
}

#[derive(Debug, Clone)]
pub struct LockRedisConfig {
    /// Redis address.
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Disable webhook signature verification.
    pub disable_webhook_signature: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot name.
    pub name: String,
    /// Database options.
    pub database: DatabaseConfig,
    /// API options.
    pub api: ApiConfig,
    /// Slack options.
    pub slack: SlackConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Lock options.
    pub lock: LockConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            name: env_to_str("BOT_NAME", "approbot"),
            database: DatabaseConfig {
                driver: DatabaseDriver::from_str(&env_to_str("BOT_DATABASE_DRIVER", "memory"))?,
                pg: DatabasePgConfig {
                    url: env_to_str("BOT_DATABASE_PG_URL", ""),
                    pool_size: env_to_u32("BOT_DATABASE_PG_POOL_SIZE", 20),
                    connection_timeout: env_to_u32("BOT_DATABASE_PG_CONNECTION_TIMEOUT", 5),
                },
            },
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("BOT_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("BOT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("BOT_API_GITHUB_ROOT_URL", "https://api.github.com"),
                },
            },
            slack: SlackConfig {
                driver: SlackDriver::from_str(&env_to_str("BOT_SLACK_DRIVER", "slack"))?,
                root_url: env_to_str("BOT_SLACK_API_ROOT_URL", "https://slack.com/api"),
                connect_timeout: env_to_u64("BOT_SLACK_CONNECT_TIMEOUT", 5000),
                bot_token: env_to_str("BOT_SLACK_BOT_TOKEN", ""),
                bot_user_id: env_to_str("BOT_SLACK_BOT_USER_ID", ""),
                signing_secret: env_to_str("BOT_SLACK_SIGNING_SECRET", ""),
                trigger_emoji: env_to_str("BOT_SLACK_TRIGGER_EMOJI", "white_check_mark"),
                allowed_channels: env_to_list("BOT_SLACK_ALLOWED_CHANNELS"),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            lock: LockConfig {
                driver: LockDriver::from_str(&env_to_str("BOT_LOCK_DRIVER", "null"))?,
                redis: LockRedisConfig {
                    address: env_to_str("BOT_LOCK_REDIS_ADDRESS", "redis://localhost"),
                },
                event_expiration: env_to_u64("BOT_LOCK_EVENT_EXPIRATION", 600),
            },
            sentry: SentryConfig {
                url: env_to_str("BOT_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("BOT_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
                disable_webhook_signature: env_to_bool(
                    "BOT_SERVER_DISABLE_WEBHOOK_SIGNATURE",
                    false,
                ),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Self, DriverError> {
        Self::from_env("0.0.0".into())
    }

    /// Check if a channel can trigger approvals.
    pub fn is_channel_allowed(&self, channel: &str) -> bool {
        self.slack.allowed_channels.is_empty()
            || self.slack.allowed_channels.iter().any(|c| c == channel)
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|e| parse_bool(&e, default))
        .unwrap_or(default)
}

/// Unknown values fall back to the default.
fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

fn env_to_list(name: &str) -> Vec<String> {
    env::var(name).map(|e| split_list(&e)).unwrap_or_default()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
