use approbot_models::DelegatedCredential;
use sqlx::{postgres::PgRow, FromRow, Row};

pub(crate) struct DelegatedCredentialRow(DelegatedCredential);

impl From<DelegatedCredentialRow> for DelegatedCredential {
    fn from(r: DelegatedCredentialRow) -> Self {
        r.0
    }
}

impl<'r> FromRow<'r, PgRow> for DelegatedCredentialRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(DelegatedCredential {
            slack_user_id: row.try_get("slack_user_id")?,
            github_username: row.try_get("github_username")?,
            github_token: row.try_get("github_token")?,
        }))
    }
}
