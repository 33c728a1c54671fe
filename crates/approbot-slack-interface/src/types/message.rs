use serde::{Deserialize, Serialize};

/// Slack message, as returned by `conversations.history`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SlackMessage {
    /// Message timestamp.
    pub ts: String,
    /// Author, missing on some bot messages.
    #[serde(default)]
    pub user: Option<String>,
    /// Message text.
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_message() {
        let message: SlackMessage = serde_json::from_str(
            r#"{"type":"message","user":"U1","text":"hello <@U2>","ts":"1512085950.000216"}"#,
        )
        .unwrap();

        assert_eq!(
            message,
            SlackMessage {
                ts: "1512085950.000216".into(),
                user: Some("U1".into()),
                text: "hello <@U2>".into()
            }
        );
    }
}
