//! Webhook constants.

/// Slack signature header.
pub const SLACK_SIGNATURE_HEADER: &str = "X-Slack-Signature";
/// Slack request timestamp header.
pub const SLACK_TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";
