//! HTTP handlers, one module per resource.

pub mod snack;
pub mod user;
