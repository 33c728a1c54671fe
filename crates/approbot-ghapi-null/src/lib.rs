//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use approbot_ghapi_interface::{types::GhReviewApi, ApiService, Result};
use async_trait::async_trait;

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self, _token), ret)]
    async fn pull_reviews_list(
        &self,
        _token: &str,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self, _token))]
    async fn pull_reviews_approve(
        &self,
        _token: &str,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<()> {
        Ok(())
    }
}
