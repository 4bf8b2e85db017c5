//! Handlers for the `/users` resource.
//!
//! The user store exists to back the snack purchaser reference; it
//! carries no credentials or login surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use snackbar_core::error::CoreError;
use snackbar_core::types::DbId;
use snackbar_core::user::validate_username;
use snackbar_db::models::user::{User, UserInput};
use snackbar_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    let username = input
        .username
        .ok_or_else(|| CoreError::Validation("Field 'username' is required".to_string()))?;

    validate_username(&username).map_err(AppError::BadRequest)?;

    // Pre-check for a friendlier message; the unique constraint on
    // `users.username` remains the backstop for concurrent creates.
    if UserRepo::find_by_username(&state.pool, &username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Username '{username}' is already taken"
        ))));
    }

    let user = UserRepo::create(&state.pool, &username).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}
