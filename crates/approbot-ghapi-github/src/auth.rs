//! Auth.

use std::time::Duration;

use approbot_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Get a GitHub client builder authenticated with a user token.
pub fn get_authenticated_client_builder(
    config: &Config,
    token: &str,
) -> Result<ClientBuilder, GitHubError> {
    let mut headers = default_headers();
    let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| GitHubError::InvalidTokenError)?;
    auth_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth_value);

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("approbot/{}", config.version))
        .default_headers(headers))
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );
    headers.insert(
        GITHUB_API_VERSION_HEADER,
        header::HeaderValue::from_static(GITHUB_API_VERSION),
    );
    headers
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.api.github.root_url, path.into())
}
