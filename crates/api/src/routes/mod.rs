pub mod auth;
pub mod categories;
pub mod health;
pub mod products;
pub mod settings;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login            login (public)
/// /upload                image upload (requires auth)
/// /categories            list (public), create (auth)
/// /categories/{id}       update, delete (auth)
/// /products              list (public), create (auth)
/// /products/{id}         get (public), update, delete (auth)
/// /settings              get (public), update (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(upload::router())
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/settings", settings::router())
}
