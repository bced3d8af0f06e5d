//! Site settings: a single logical row of free-text contact fields.

use menggaris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Settings {
    pub id: DbId,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub warehouse_address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub about: Option<String>,
    /// Raw embeddable map markup.
    pub maps: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `PUT /api/settings`. Every field is optional free text;
/// no content validation is applied.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsInput {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub warehouse_address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub about: Option<String>,
    pub maps: Option<String>,
}
