//! Category entity and write DTOs.

use menggaris_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for category create and update.
#[derive(Debug)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
}
