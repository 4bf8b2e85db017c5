//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept the pool as the first argument.

pub mod snack_repo;
pub mod user_repo;

pub use snack_repo::SnackRepo;
pub use user_repo::UserRepo;
