//! Route definition for image upload.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes merged at the `/api` root.
///
/// ```text
/// POST /upload   -> upload (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(upload::upload))
}
