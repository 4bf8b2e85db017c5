//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use snackbar_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a new user.
///
/// The field is optional at the serde level so a missing `username`
/// surfaces as a validation failure (400) rather than a deserialization
/// rejection (422).
#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub username: Option<String>,
}
