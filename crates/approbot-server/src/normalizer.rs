//! Request body normalization.
//!
//! Slack sends Events API callbacks as JSON, while slash commands and
//! interactive components use form encoding, the latter wrapping their JSON
//! in a `payload` field. Every shape ends up as a [`SlackEnvelope`].

use approbot_slack_interface::types::SlackEnvelope;
use serde_json::{Map, Value};

use crate::{Result, ServerError};

const NESTED_PAYLOAD_FIELD: &str = "payload";

/// Parse a raw body into an envelope.
pub fn normalize_body(body: &[u8]) -> Result<SlackEnvelope> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(json_error) => parse_form_body(body).ok_or_else(|| ServerError::MalformedBody {
            message: json_error.to_string(),
        })?,
    };

    serde_json::from_value(value).map_err(|e| ServerError::MalformedBody {
        message: e.to_string(),
    })
}

/// Check if a body is an endpoint verification request.
pub fn is_url_verification(body: &[u8]) -> bool {
    matches!(
        normalize_body(body),
        Ok(SlackEnvelope::UrlVerification { .. })
    )
}

fn parse_form_body(body: &[u8]) -> Option<Value> {
    let fields: Vec<(String, String)> = serde_urlencoded::from_bytes(body).ok()?;
    if fields.is_empty() {
        return None;
    }

    if let Some((_, payload)) = fields.iter().find(|(k, _)| k == NESTED_PAYLOAD_FIELD) {
        return serde_json::from_str(payload).ok();
    }

    Some(Value::Object(
        fields
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect::<Map<_, _>>(),
    ))
}
