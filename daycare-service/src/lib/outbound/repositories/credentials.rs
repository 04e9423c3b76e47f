use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::identity::errors::AccountError;
use crate::domain::identity::errors::CredentialStoreError;
use crate::domain::identity::models::CredentialRecord;
use crate::domain::identity::ports::CredentialStore;

/// Postgres-backed login account store.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn record_from_row(row: &PgRow) -> Result<CredentialRecord, sqlx::Error> {
    Ok(CredentialRecord {
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        roles: row.try_get("roles")?,
    })
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn lookup(
        &self,
        subject: &str,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let row = sqlx::query(
            r#"
            SELECT username, password_hash, roles
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Database(e.to_string()))?;

        row.as_ref()
            .map(record_from_row)
            .transpose()
            .map_err(|e| CredentialStoreError::Database(e.to_string()))
    }

    async fn create(&self, record: CredentialRecord) -> Result<CredentialRecord, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, username, password_hash, roles)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.username)
        .bind(&record.password_hash)
        .bind(&record.roles)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::UsernameAlreadyExists(record.username.clone());
                }
            }
            AccountError::Store(CredentialStoreError::Database(e.to_string()))
        })?;

        Ok(record)
    }
}
