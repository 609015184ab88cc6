use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::convert::UserId;

/// User record in the database. A row with `deleted_at` set is soft-deleted
/// and hidden from every query except the deleted-users ones.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_auth: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

impl User {
    /// Find a live user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, is_auth, created_at, updated_at, deleted_at
            FROM users
            WHERE email = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a live user by id.
    pub async fn find_by_id(db: &PgPool, id: UserId) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, is_auth, created_at, updated_at, deleted_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password. New users start unauthorized.
    pub async fn create(db: &PgPool, email: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, is_auth, created_at, updated_at, deleted_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    pub async fn count_all(db: &PgPool) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM users WHERE deleted_at IS NULL"#,
        )
        .fetch_one(db)
        .await?;
        Ok(count)
    }

    pub async fn list_by_auth(db: &PgPool, is_auth: bool) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, is_auth, created_at, updated_at, deleted_at
            FROM users
            WHERE is_auth = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(is_auth)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn count_by_auth(db: &PgPool, is_auth: bool) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM users WHERE is_auth = $1 AND deleted_at IS NULL"#,
        )
        .bind(is_auth)
        .fetch_one(db)
        .await?;
        Ok(count)
    }

    /// "New" means never modified since creation and not yet authorized.
    pub async fn list_new(db: &PgPool) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, is_auth, created_at, updated_at, deleted_at
            FROM users
            WHERE created_at = updated_at AND is_auth = FALSE AND deleted_at IS NULL
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn count_new(db: &PgPool) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM users
            WHERE created_at = updated_at AND is_auth = FALSE AND deleted_at IS NULL
            "#,
        )
        .fetch_one(db)
        .await?;
        Ok(count)
    }

    /// Soft-deleted rows only; the usual `deleted_at IS NULL` filter is
    /// deliberately absent here.
    pub async fn list_deleted(db: &PgPool) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, is_auth, created_at, updated_at, deleted_at
            FROM users
            WHERE deleted_at IS NOT NULL
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn count_deleted(db: &PgPool) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM users WHERE deleted_at IS NOT NULL"#,
        )
        .fetch_one(db)
        .await?;
        Ok(count)
    }
}
