use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use approbot_database_interface::{DbService, Result};
use approbot_models::DelegatedCredential;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct MemoryDb {
    delegated_credentials: RwLock<HashMap<String, DelegatedCredential>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }

    // Writes are single map operations, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, DelegatedCredential>> {
        self.delegated_credentials
            .read()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, DelegatedCredential>> {
        self.delegated_credentials
            .write()
            .unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl DbService for MemoryDb {
    async fn delegated_credentials_create(
        &self,
        instance: DelegatedCredential,
    ) -> Result<DelegatedCredential> {
        self.write()
            .insert(instance.slack_user_id.clone(), instance.clone());
        Ok(instance)
    }

    async fn delegated_credentials_get(
        &self,
        slack_user_id: &str,
    ) -> Result<Option<DelegatedCredential>> {
        Ok(self.read().get(slack_user_id).cloned())
    }

    async fn delegated_credentials_delete(&self, slack_user_id: &str) -> Result<bool> {
        Ok(self.write().remove(slack_user_id).is_some())
    }

    async fn delegated_credentials_all(&self) -> Result<Vec<DelegatedCredential>> {
        let mut values: Vec<_> = self.read().values().cloned().collect();
        values.sort_by(|a, b| a.slack_user_id.cmp(&b.slack_user_id));
        Ok(values)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approbot_database_interface::DatabaseError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn create_and_get() {
        let db = MemoryDb::new();
        assert_eq!(db.delegated_credentials_get("U1").await.unwrap(), None);

        db.delegated_credentials_create(DelegatedCredential::new("U1", "octocat", "t1"))
            .await
            .unwrap();
        assert_eq!(
            db.delegated_credentials_get("U1").await.unwrap(),
            Some(DelegatedCredential::new("U1", "octocat", "t1"))
        );

        assert!(matches!(
            db.delegated_credentials_get_expect("U2").await,
            Err(DatabaseError::UnknownDelegatedCredential(_))
        ));
    }

    #[tokio::test]
    async fn create_replaces() {
        let db = MemoryDb::new();
        db.delegated_credentials_create(DelegatedCredential::new("U1", "octocat", "t1"))
            .await
            .unwrap();
        db.delegated_credentials_create(DelegatedCredential::new("U1", "octocat", "t2"))
            .await
            .unwrap();

        assert_eq!(
            db.delegated_credentials_get_expect("U1")
                .await
                .unwrap()
                .github_token,
            "t2"
        );
        assert_eq!(db.delegated_credentials_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn all_and_delete() {
        let db = MemoryDb::new();
        db.delegated_credentials_create(DelegatedCredential::new("U2", "b", "t"))
            .await
            .unwrap();
        db.delegated_credentials_create(DelegatedCredential::new("U1", "a", "t"))
            .await
            .unwrap();

        let users: Vec<_> = db
            .delegated_credentials_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.slack_user_id)
            .collect();
        assert_eq!(users, vec!["U1".to_string(), "U2".to_string()]);

        assert!(db.delegated_credentials_delete("U1").await.unwrap());
        assert!(!db.delegated_credentials_delete("U1").await.unwrap());
        db.health_check().await.unwrap();
    }
}
