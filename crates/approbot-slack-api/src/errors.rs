use approbot_slack_interface::SlackError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum SlackApiError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid bot token header value")]
    InvalidTokenError,

    #[error("Slack responded with status {status}")]
    StatusError { status: u16 },
}

impl From<reqwest::Error> for SlackApiError {
    fn from(e: reqwest::Error) -> Self {
        SlackApiError::HttpError { source: e }
    }
}

impl From<SlackApiError> for SlackError {
    fn from(e: SlackApiError) -> Self {
        SlackError::ImplementationError { source: e.into() }
    }
}
