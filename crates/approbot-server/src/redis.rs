//! Redis wrappers.

use std::time::Duration;

use approbot_lock_interface::{LockError, LockService, LockStatus};
use approbot_lock_redis::RedisLockService;
use async_trait::async_trait;

use crate::metrics::REDIS_CALLS;

/// Redis service with metrics.
pub struct MetricsRedisService {
    inner: RedisLockService,
}

impl MetricsRedisService {
    /// Creates a new service.
    pub fn new(addr: &str) -> Result<Self, LockError> {
        Ok(Self {
            inner: RedisLockService::new(addr)?,
        })
    }
}

#[async_trait]
impl LockService for MetricsRedisService {
    async fn try_lock_resource(
        &self,
        name: &str,
        expiration: Duration,
    ) -> Result<LockStatus, LockError> {
        REDIS_CALLS.inc();
        self.inner.try_lock_resource(name, expiration).await
    }

    async fn health_check(&self) -> Result<(), LockError> {
        REDIS_CALLS.inc();
        self.inner.health_check().await
    }
}
