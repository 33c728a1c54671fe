use std::time::Duration;

use approbot_lock_interface::{LockError, LockService, LockStatus};
use async_trait::async_trait;

/// Null lock service, every lock is granted.
#[derive(Clone, Default)]
pub struct NullLockService {
    _private: (),
}

impl NullLockService {
    /// Creates a null lock service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl LockService for NullLockService {
    #[tracing::instrument(skip(self), ret)]
    async fn try_lock_resource(
        &self,
        name: &str,
        expiration: Duration,
    ) -> Result<LockStatus, LockError> {
        Ok(LockStatus::SuccessfullyLocked)
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<(), LockError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_grants() {
        let service = NullLockService::new();
        let expiration = Duration::from_secs(10);

        assert_eq!(
            service.try_lock_resource("a", expiration).await.unwrap(),
            LockStatus::SuccessfullyLocked
        );
        assert_eq!(
            service.try_lock_resource("a", expiration).await.unwrap(),
            LockStatus::SuccessfullyLocked
        );
    }
}
