use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};

use crate::{
    convert::{parse_uid, uid_to_string},
    state::AppState,
    users::{
        dto::{PublicUser, UserStats},
        services::{self, UserLookupError},
    },
    validate::validate_email,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/stats", get(stats))
        .route("/users/authorized", get(authorized))
        .route("/users/unauthorized", get(unauthorized))
        .route("/users/new", get(new))
        .route("/users/deleted", get(deleted))
        .route("/users/lookup", get(lookup))
        .route("/users/:id", get(by_id))
        .route("/users/:id/email", get(email_by_id))
}

#[instrument(skip(state))]
async fn stats(State(state): State<AppState>) -> Json<UserStats> {
    Json(UserStats {
        total: services::count_users(&state.db).await,
        authorized: services::count_authorized_users(&state.db).await,
        unauthorized: services::count_unauthorized_users(&state.db).await,
        new_users: services::count_new_users(&state.db).await,
        deleted: services::count_deleted_users(&state.db).await,
    })
}

#[instrument(skip(state))]
async fn authorized(State(state): State<AppState>) -> Json<Vec<PublicUser>> {
    let users = services::authorized_users(&state.db).await;
    Json(users.into_iter().map(PublicUser::from).collect())
}

#[instrument(skip(state))]
async fn unauthorized(State(state): State<AppState>) -> Json<Vec<PublicUser>> {
    let users = services::unauthorized_users(&state.db).await;
    Json(users.into_iter().map(PublicUser::from).collect())
}

#[instrument(skip(state))]
async fn new(State(state): State<AppState>) -> Json<Vec<PublicUser>> {
    let users = services::new_users(&state.db).await;
    Json(users.into_iter().map(PublicUser::from).collect())
}

#[instrument(skip(state))]
async fn deleted(State(state): State<AppState>) -> Json<Vec<PublicUser>> {
    let users = services::deleted_users(&state.db).await;
    Json(users.into_iter().map(PublicUser::from).collect())
}

#[instrument(skip(state))]
async fn by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    let id = parse_uid(&raw_id).map_err(|e| {
        warn!(raw_id = %raw_id, "bad user id");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    match services::user_by_id(&state.db, id).await {
        Ok(user) => Ok(Json(PublicUser::from(user))),
        Err(e @ (UserLookupError::NotFound | UserLookupError::ZeroId)) => {
            Err((StatusCode::NOT_FOUND, e.to_string()))
        }
        Err(e) => {
            error!(error = %e, id, "user_by_id failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[derive(Debug, Serialize)]
struct EmailResponse {
    // Ids are echoed as strings so clients never round them.
    id: String,
    email: String,
}

#[instrument(skip(state))]
async fn email_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<EmailResponse>, (StatusCode, String)> {
    let id = parse_uid(&raw_id).map_err(|e| {
        warn!(raw_id = %raw_id, "bad user id");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    // Absent users come back as an empty email, not an error.
    let email = services::email_from_id(&state.db, id).await;
    Ok(Json(EmailResponse {
        id: uid_to_string(id),
        email,
    }))
}

#[derive(Debug, Deserialize)]
struct LookupQuery {
    email: String,
}

#[instrument(skip(state))]
async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    let email = query.email.trim().to_lowercase();
    if let Err(e) = validate_email(&email) {
        warn!(email = %email, "bad lookup email");
        return Err((StatusCode::BAD_REQUEST, e.to_string()));
    }

    match services::user_by_email(&state.db, &email).await {
        Ok(user) => Ok(Json(PublicUser::from(user))),
        Err(e @ (UserLookupError::NotFound | UserLookupError::EmptyEmail)) => {
            Err((StatusCode::NOT_FOUND, e.to_string()))
        }
        Err(e) => {
            error!(error = %e, email = %email, "user_by_email failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
