//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /       -> list (public)
/// POST   /       -> create (requires auth)
/// PUT    /{id}   -> update (requires auth)
/// DELETE /{id}   -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route(
            "/{id}",
            axum::routing::put(categories::update).delete(categories::delete),
        )
}
