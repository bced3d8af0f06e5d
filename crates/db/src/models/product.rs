//! Product entity, list parameters, and write DTOs.

use menggaris_core::catalog::images_from_value;
use menggaris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table joined with its category name.
///
/// `images` carries the raw JSONB column; [`Product`] is the decoded API
/// shape.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: DbId,
    pub images: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Resolved category name (LEFT JOIN, so nullable).
    pub category_name: Option<String>,
}

/// API-facing product shape with the image list decoded.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: DbId,
    pub category_name: Option<String>,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let images = images_from_value(row.images.as_ref());
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: row.category_id,
            category_name: row.category_name,
            images,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Validated input for product create and update.
#[derive(Debug)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: DbId,
    pub images: Vec<String>,
}

/// Query parameters for `GET /api/products`.
///
/// The storefront sends every parameter on every request, with unused ones
/// as empty strings (`?page=1&category=&search=`), so the numeric fields
/// treat an empty value as absent instead of failing to parse.
#[derive(Debug, Default, Deserialize)]
pub struct ProductSearchParams {
    /// 1-based page number; defaults to 1.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<i64>,
    /// Exact category filter.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<DbId>,
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
