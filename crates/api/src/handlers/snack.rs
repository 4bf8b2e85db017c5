//! Handlers for the `/snacks` resource.
//!
//! Create and update take the full field set and validate it before
//! touching the database: a missing field, an empty value, or a
//! purchaser id with no matching user all surface as 400.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use snackbar_core::error::CoreError;
use snackbar_core::snack::{validate_description, validate_title};
use snackbar_core::types::DbId;
use snackbar_db::models::snack::{SnackFields, SnackInput, SnackRecord};
use snackbar_db::repositories::{SnackRepo, UserRepo};
use snackbar_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Check required fields and resolve the purchaser reference.
///
/// Shared by create and update since both take the full field set.
async fn resolve_fields(pool: &DbPool, input: SnackInput) -> AppResult<SnackFields> {
    let title = input
        .title
        .ok_or_else(|| CoreError::Validation("Field 'title' is required".to_string()))?;
    let description = input
        .description
        .ok_or_else(|| CoreError::Validation("Field 'description' is required".to_string()))?;
    let purchaser_id = input
        .purchaser
        .ok_or_else(|| CoreError::Validation("Field 'purchaser' is required".to_string()))?;

    validate_title(&title).map_err(AppError::BadRequest)?;
    validate_description(&description).map_err(AppError::BadRequest)?;

    if !UserRepo::exists(pool, purchaser_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Purchaser id {purchaser_id} does not resolve to an existing user"
        ))));
    }

    Ok(SnackFields {
        title,
        description,
        purchaser_id,
    })
}

/// GET /api/v1/snacks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SnackRecord>>> {
    let snacks = SnackRepo::list(&state.pool).await?;
    Ok(Json(snacks))
}

/// POST /api/v1/snacks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SnackInput>,
) -> AppResult<(StatusCode, Json<SnackRecord>)> {
    let fields = resolve_fields(&state.pool, input).await?;
    let snack = SnackRepo::create(&state.pool, &fields).await?;

    tracing::info!(
        snack_id = snack.id,
        purchaser = %snack.purchaser,
        "Snack created"
    );

    Ok((StatusCode::CREATED, Json(snack)))
}

/// GET /api/v1/snacks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SnackRecord>> {
    let snack = SnackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Snack", id }))?;
    Ok(Json(snack))
}

/// PUT /api/v1/snacks/{id}
///
/// Full replacement of all mutable fields; `id` and `created_at`
/// never change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SnackInput>,
) -> AppResult<Json<SnackRecord>> {
    let fields = resolve_fields(&state.pool, input).await?;
    let snack = SnackRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Snack", id }))?;

    tracing::info!(snack_id = id, "Snack updated");

    Ok(Json(snack))
}

/// DELETE /api/v1/snacks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SnackRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Snack", id }));
    }

    tracing::info!(snack_id = id, "Snack deleted");

    Ok(StatusCode::NO_CONTENT)
}
