//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - The serialized API representation
//! - `Deserialize` DTOs for writes

pub mod snack;
pub mod user;
