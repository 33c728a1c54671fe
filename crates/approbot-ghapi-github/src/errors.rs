use approbot_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid token header value")]
    InvalidTokenError,

    #[error("GitHub responded with status {status}: {message}")]
    ResponseError { status: u16, message: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::ResponseError { status, message } => {
                ApiError::ResponseError { status, message }
            }
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
