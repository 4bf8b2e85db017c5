//! Route definitions for the `/snacks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::snack;
use crate::state::AppState;

/// Routes mounted at `/snacks`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(snack::list).post(snack::create))
        .route(
            "/{id}",
            get(snack::get_by_id)
                .put(snack::update)
                .delete(snack::delete),
        )
}
