//! Admin account model. Created once at process bootstrap, never exposed
//! through a CRUD surface.

use menggaris_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `admin_users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
    /// Argon2id PHC hash. Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Input for the bootstrap insert.
#[derive(Debug)]
pub struct CreateAdminUser {
    pub username: String,
    pub password_hash: String,
}
