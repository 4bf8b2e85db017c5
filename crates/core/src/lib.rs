//! Shared domain types, errors, and validation for the snackbar backend.

pub mod error;
pub mod snack;
pub mod types;
pub mod user;
