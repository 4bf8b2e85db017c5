pub mod health;
pub mod snack;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /snacks            list, create
/// /snacks/{id}       get, update, delete
///
/// /users             list, create
/// /users/{id}        get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/snacks", snack::router())
        .nest("/users", user::router())
}
