use approbot_database_interface::{DatabaseError, DbService, Result};
use approbot_models::DelegatedCredential;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::row::DelegatedCredentialRow;

pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn wrap_error(e: sqlx::Error) -> DatabaseError {
        DatabaseError::ImplementationError { source: e.into() }
    }
}

#[async_trait]
impl DbService for PostgresDb {
    #[tracing::instrument(skip(self), fields(slack_user_id = %instance.slack_user_id))]
    async fn delegated_credentials_create(
        &self,
        instance: DelegatedCredential,
    ) -> Result<DelegatedCredential> {
        let row = sqlx::query_as::<_, DelegatedCredentialRow>(
            r#"
            INSERT INTO delegated_credential
            (
                slack_user_id,
                github_username,
                github_token
            ) VALUES (
                $1,
                $2,
                $3
            )
            ON CONFLICT (slack_user_id) DO UPDATE
            SET github_username = EXCLUDED.github_username,
                github_token = EXCLUDED.github_token
            RETURNING slack_user_id, github_username, github_token;
            "#,
        )
        .bind(&instance.slack_user_id)
        .bind(&instance.github_username)
        .bind(&instance.github_token)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(row.into())
    }

    #[tracing::instrument(skip(self))]
    async fn delegated_credentials_get(
        &self,
        slack_user_id: &str,
    ) -> Result<Option<DelegatedCredential>> {
        let row = sqlx::query_as::<_, DelegatedCredentialRow>(
            r#"
            SELECT slack_user_id, github_username, github_token
            FROM delegated_credential
            WHERE slack_user_id = $1
        "#,
        )
        .bind(slack_user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn delegated_credentials_delete(&self, slack_user_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM delegated_credential
            WHERE slack_user_id = $1
        "#,
        )
        .bind(slack_user_id)
        .execute(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn delegated_credentials_all(&self) -> Result<Vec<DelegatedCredential>> {
        let rows = sqlx::query_as::<_, DelegatedCredentialRow>(
            r#"
            SELECT slack_user_id, github_username, github_token
            FROM delegated_credential
            ORDER BY slack_user_id
        "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1;")
            .execute(&self.pool)
            .await
            .map_err(Self::wrap_error)?;

        Ok(())
    }
}
