//! GitHub types.

mod review;
mod user;

pub use review::{GhReviewApi, GhReviewStateApi};
pub use user::GhUser;
