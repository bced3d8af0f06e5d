//! Pure domain logic for the Menggaris catalog backend.
//!
//! No I/O lives here: this crate holds the shared error taxonomy, catalog
//! pagination and image-list helpers, and upload validation rules. The `db`
//! and `api` crates build on top of it.

pub mod catalog;
pub mod error;
pub mod types;
pub mod upload;
