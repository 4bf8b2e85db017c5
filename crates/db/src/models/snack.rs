//! Snack entity model and DTOs.

use serde::{Deserialize, Serialize};
use snackbar_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// API representation of a snack: the purchaser is rendered as the
/// referenced user's username, not its numeric id.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SnackRecord {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub purchaser: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or fully replacing a snack.
///
/// All fields are required by the contract but optional at the serde
/// level: handlers check them explicitly so a missing field surfaces as
/// a validation failure (400) rather than a deserialization rejection
/// (422). `purchaser` is the user's numeric id.
#[derive(Debug, Deserialize)]
pub struct SnackInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub purchaser: Option<DbId>,
}

/// Validated write payload passed to the repository.
#[derive(Debug)]
pub struct SnackFields {
    pub title: String,
    pub description: String,
    pub purchaser_id: DbId,
}
