use crate::types::DbId;

/// Domain-level error taxonomy shared by all crates.
///
/// The HTTP layer maps each variant onto a status code: `NotFound` -> 404,
/// `Validation` and `Conflict` -> 400, `Unauthorized` -> 401,
/// `Forbidden` -> 403, `Internal` -> 500 (detail logged server-side only).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
