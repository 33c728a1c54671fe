use std::time::Duration;

use approbot_lock_interface::{LockError, LockService, LockStatus};
use async_trait::async_trait;
use redis::{Client, Cmd, Value};

/// Redis lock service.
#[derive(Clone)]
pub struct RedisLockService(Client);

impl RedisLockService {
    /// Creates a new redis adapter.
    pub fn new(addr: &str) -> Result<Self, LockError> {
        Client::open(addr)
            .map(Self)
            .map_err(|_| LockError::InvalidAddress {
                address: addr.into(),
            })
    }

    async fn execute_command(&self, cmd: &Cmd) -> Result<Value, LockError> {
        let mut conn = self
            .0
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| LockError::ImplementationError { source: e.into() })?;

        cmd.query_async(&mut conn)
            .await
            .map_err(|e| LockError::ImplementationError { source: e.into() })
    }
}

#[async_trait]
impl LockService for RedisLockService {
    #[tracing::instrument(skip(self), ret)]
    async fn try_lock_resource(
        &self,
        name: &str,
        expiration: Duration,
    ) -> Result<LockStatus, LockError> {
        let response = self
            .execute_command(
                redis::cmd("SET")
                    .arg(name)
                    .arg(1)
                    .arg("NX")
                    .arg("EX")
                    .arg(expiration.as_secs().max(1)),
            )
            .await?;

        match response {
            Value::Okay => Ok(LockStatus::SuccessfullyLocked),
            Value::Nil => Ok(LockStatus::AlreadyLocked),
            other => Err(LockError::ImplementationError {
                source: format!("Unsupported response: {other:?}").into(),
            }),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<(), LockError> {
        self.execute_command(&redis::cmd("PING")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_address() {
        assert!(matches!(
            RedisLockService::new("not a url"),
            Err(LockError::InvalidAddress { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        let service = RedisLockService::new("redis://127.0.0.1:1").unwrap();

        assert!(matches!(
            service
                .try_lock_resource("approbot-test", Duration::from_secs(1))
                .await,
            Err(LockError::ImplementationError { .. })
        ));
    }
}
