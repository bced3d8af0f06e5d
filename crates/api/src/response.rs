//! Shared response envelope types for API handlers.
//!
//! Success bodies always carry a human-readable `message`; mutations that
//! create a row add the generated `id`; product listing uses the paginated
//! envelope the storefront expects.

use menggaris_core::types::DbId;
use serde::Serialize;

/// Standard `{ "message": ... }` success body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "id": ... }` body for creating mutations.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// Paginated product listing envelope.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "currentPage")]
    pub current_page: i64,
}
