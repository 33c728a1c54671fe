use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::GhUser;

/// Review state (API version)
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhReviewStateApi {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    #[default]
    Pending,
}

/// Review (API version)
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GhReviewApi {
    /// User.
    pub user: GhUser,
    /// Submitted at, missing on pending reviews.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// State.
    pub state: GhReviewStateApi,
}

impl GhReviewApi {
    /// Build a review for a user and a state.
    pub fn new(login: &str, state: GhReviewStateApi) -> Self {
        Self {
            user: GhUser {
                login: login.into(),
            },
            submitted_at: None,
            state,
        }
    }
}
