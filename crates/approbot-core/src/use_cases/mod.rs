//! Use cases.

pub mod approvals;
pub mod credentials;
pub mod notifications;
pub mod slack;
