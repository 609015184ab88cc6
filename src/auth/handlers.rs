use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest},
        password::{hash_password, verify_password},
    },
    state::AppState,
    users::{
        dto::PublicUser,
        repo::User,
        services::{self, UserLookupError},
    },
    validate::{validate_email, validate_password},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if let Err(e) = validate_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, e.to_string()));
    }

    if let Err(e) = validate_password(&payload.password) {
        warn!(error = %e, "invalid password");
        return Err((StatusCode::BAD_REQUEST, e.to_string()));
    }

    if services::email_exists(&state.db, &payload.email).await {
        warn!(email = %payload.email, "email already registered");
        return Err((StatusCode::CONFLICT, "Email already registered".into()));
    }

    let hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let user = User::create(&state.db, &payload.email, &hash)
        .await
        .map_err(|e| {
            error!(error = %e, "create user failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if let Err(e) = validate_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, e.to_string()));
    }

    let user = match services::user_by_email(&state.db, &payload.email).await {
        Ok(u) => u,
        Err(UserLookupError::NotFound | UserLookupError::EmptyEmail) => {
            warn!(email = %payload.email, "login unknown email");
            return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()));
        }
        Err(e) => {
            error!(error = %e, "user_by_email failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    if !verify_password(&payload.password, &user.password_hash) {
        warn!(email = %payload.email, user_id = user.id, "login invalid password");
        return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()));
    }

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(PublicUser::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_rejects_invalid_email_before_touching_the_store() {
        let state = AppState::fake();
        let err = register(
            State(state),
            Json(RegisterRequest {
                email: "not-an-email".into(),
                password: "long-enough".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_rejects_short_password_before_touching_the_store() {
        let state = AppState::fake();
        let err = register(
            State(state),
            Json(RegisterRequest {
                email: "a@b.co".into(),
                password: "short".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert!(err.1.contains("at least 8"));
    }

    #[tokio::test]
    async fn login_rejects_invalid_email_before_touching_the_store() {
        let state = AppState::fake();
        let err = login(
            State(state),
            Json(LoginRequest {
                email: "nope".into(),
                password: "whatever-pass".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }
}
