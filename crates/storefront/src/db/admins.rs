//! Admin account repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Admin;

#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i32,
    username: String,
    email: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<AdminRow> for Admin {
    fn from(row: AdminRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

/// Repository for admin account operations.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an active admin and their password hash by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(Admin, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct AdminWithHash {
            id: i32,
            username: String,
            email: String,
            is_active: bool,
            created_at: DateTime<Utc>,
            password_hash: String,
        }

        let row: Option<AdminWithHash> = sqlx::query_as(
            "SELECT id, username, email, is_active, created_at, password_hash \
             FROM admins WHERE username = $1 AND is_active",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            (
                Admin {
                    id: r.id,
                    username: r.username,
                    email: r.email,
                    is_active: r.is_active,
                    created_at: r.created_at,
                },
                r.password_hash,
            )
        }))
    }

    /// Get an admin by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Admin>, RepositoryError> {
        let row: Option<AdminRow> = sqlx::query_as(
            "SELECT id, username, email, is_active, created_at FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Admin::from))
    }

    /// Create a new admin account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username is taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Admin, RepositoryError> {
        let row: AdminRow = sqlx::query_as(
            "INSERT INTO admins (username, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING id, username, email, is_active, created_at",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }
}
