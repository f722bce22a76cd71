//! User record handlers.

use axum::{extract::State, routing::get, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{CREATE_USER_FAILED, FETCH_USERS_FAILED};
use crate::domain::{CreateUser, UserRecord};
use crate::errors::AppResult;
use crate::types::{Created, Success};

/// Create user record routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user))
}

/// List all user records, newest first
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All user records", body = Vec<UserRecord>),
        (status = 500, description = "Failed to fetch users")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Success<Vec<UserRecord>>> {
    let users = state
        .directory
        .list_users()
        .await
        .map_err(|e| e.or_fail_with(FETCH_USERS_FAILED))?;

    Ok(Success(users))
}

/// Create a user record
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User record created", body = UserRecord),
        (status = 400, description = "Missing or malformed field"),
        (status = 409, description = "User with this email already exists"),
        (status = 500, description = "Failed to create user")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Created<UserRecord>> {
    let user = state
        .directory
        .create_user(payload)
        .await
        .map_err(|e| e.or_fail_with(CREATE_USER_FAILED))?;

    Ok(Created(user))
}
