//! Lock interfaces.

use std::time::Duration;

use async_trait::async_trait;

use crate::LockError;

/// Lock status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    /// Already locked by someone else.
    AlreadyLocked,
    /// Lock acquired, held until expiration.
    SuccessfullyLocked,
}

/// Lock adapter trait.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait LockService: Send + Sync {
    /// Tries to lock a resource, for a fixed duration.
    async fn try_lock_resource(
        &self,
        name: &str,
        expiration: Duration,
    ) -> Result<LockStatus, LockError>;
    /// Health check
    async fn health_check(&self) -> Result<(), LockError>;
}
