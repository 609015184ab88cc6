//! Query-helper contracts over the user repo. The two single-user lookups
//! surface "not found" explicitly; the list/count helpers swallow store
//! errors into empty/zero results so dashboards degrade instead of failing.

use sqlx::PgPool;
use thiserror::Error;
use tracing::error;

use crate::convert::UserId;
use crate::users::repo::User;

#[derive(Debug, Error)]
pub enum UserLookupError {
    #[error("user not found")]
    NotFound,
    #[error("uid must not be zero")]
    ZeroId,
    #[error("email must be longer than 0 characters")]
    EmptyEmail,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub async fn email_exists(db: &PgPool, email: &str) -> bool {
    match User::find_by_email(db, email).await {
        Ok(found) => found.is_some(),
        Err(e) => {
            error!(error = %e, "email_exists query failed");
            false
        }
    }
}

pub async fn user_by_email(db: &PgPool, email: &str) -> Result<User, UserLookupError> {
    if email.is_empty() {
        return Err(UserLookupError::EmptyEmail);
    }
    User::find_by_email(db, email)
        .await?
        .ok_or(UserLookupError::NotFound)
}

pub async fn user_by_id(db: &PgPool, id: UserId) -> Result<User, UserLookupError> {
    if id == 0 {
        return Err(UserLookupError::ZeroId);
    }
    User::find_by_id(db, id)
        .await?
        .ok_or(UserLookupError::NotFound)
}

/// Email of the given user, or an empty string when the user is absent.
pub async fn email_from_id(db: &PgPool, id: UserId) -> String {
    match User::find_by_id(db, id).await {
        Ok(Some(user)) => user.email,
        Ok(None) => String::new(),
        Err(e) => {
            error!(error = %e, id, "email_from_id query failed");
            String::new()
        }
    }
}

pub async fn count_users(db: &PgPool) -> i64 {
    User::count_all(db).await.unwrap_or_else(|e| {
        error!(error = %e, "count_users query failed");
        0
    })
}

pub async fn authorized_users(db: &PgPool) -> Vec<User> {
    User::list_by_auth(db, true).await.unwrap_or_else(|e| {
        error!(error = %e, "authorized_users query failed");
        Vec::new()
    })
}

pub async fn count_authorized_users(db: &PgPool) -> i64 {
    User::count_by_auth(db, true).await.unwrap_or_else(|e| {
        error!(error = %e, "count_authorized_users query failed");
        0
    })
}

pub async fn unauthorized_users(db: &PgPool) -> Vec<User> {
    User::list_by_auth(db, false).await.unwrap_or_else(|e| {
        error!(error = %e, "unauthorized_users query failed");
        Vec::new()
    })
}

pub async fn count_unauthorized_users(db: &PgPool) -> i64 {
    User::count_by_auth(db, false).await.unwrap_or_else(|e| {
        error!(error = %e, "count_unauthorized_users query failed");
        0
    })
}

pub async fn new_users(db: &PgPool) -> Vec<User> {
    User::list_new(db).await.unwrap_or_else(|e| {
        error!(error = %e, "new_users query failed");
        Vec::new()
    })
}

pub async fn count_new_users(db: &PgPool) -> i64 {
    User::count_new(db).await.unwrap_or_else(|e| {
        error!(error = %e, "count_new_users query failed");
        0
    })
}

pub async fn deleted_users(db: &PgPool) -> Vec<User> {
    User::list_deleted(db).await.unwrap_or_else(|e| {
        error!(error = %e, "deleted_users query failed");
        Vec::new()
    })
}

pub async fn count_deleted_users(db: &PgPool) -> i64 {
    User::count_deleted(db).await.unwrap_or_else(|e| {
        error!(error = %e, "count_deleted_users query failed");
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    // Guard paths return before any round-trip, so a lazy pool never connects.

    #[tokio::test]
    async fn zero_id_is_rejected_before_querying() {
        let state = AppState::fake();
        let err = user_by_id(&state.db, 0).await.unwrap_err();
        assert!(matches!(err, UserLookupError::ZeroId));
        assert_eq!(err.to_string(), "uid must not be zero");
    }

    #[tokio::test]
    async fn empty_email_is_rejected_before_querying() {
        let state = AppState::fake();
        let err = user_by_email(&state.db, "").await.unwrap_err();
        assert!(matches!(err, UserLookupError::EmptyEmail));
    }
}
