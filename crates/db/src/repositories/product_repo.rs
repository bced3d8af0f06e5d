//! Repository for the `products` table.
//!
//! Listing builds one WHERE predicate shared by the count query and the
//! page query so `total` always matches the filtered result set.

use menggaris_core::catalog::{images_to_value, page_offset, PAGE_SIZE};
use menggaris_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{ProductInput, ProductRow, ProductSearchParams};

/// Column list for joined `products` queries.
const PRODUCT_COLUMNS: &str = "\
    p.id, p.name, p.description, p.price, p.category_id, p.images, \
    p.created_at, p.updated_at, c.name AS category_name";

/// One page of products plus the filtered total.
#[derive(Debug)]
pub struct ProductPage {
    pub rows: Vec<ProductRow>,
    pub total: i64,
    pub current_page: i64,
}

pub struct ProductRepo;

impl ProductRepo {
    /// List products with optional category and search filters, newest
    /// first. `id DESC` breaks creation-time ties so ordering is stable.
    pub async fn list(
        pool: &PgPool,
        params: &ProductSearchParams,
    ) -> Result<ProductPage, sqlx::Error> {
        let page = params.page.unwrap_or(1).max(1);
        let search_pattern = params
            .search
            .as_ref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{s}%"));

        // Shared WHERE predicate.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;
        if params.category.is_some() {
            conditions.push(format!("p.category_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if search_pattern.is_some() {
            conditions.push(format!(
                "(p.name ILIKE ${bind_idx} OR p.description ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM products p{where_clause}");
        let mut count = sqlx::query_as::<_, (i64,)>(&count_query);
        if let Some(category) = params.category {
            count = count.bind(category);
        }
        if let Some(pattern) = &search_pattern {
            count = count.bind(pattern);
        }
        let (total,) = count.fetch_one(pool).await?;

        let page_query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p \
             LEFT JOIN categories c ON p.category_id = c.id\
             {where_clause} \
             ORDER BY p.created_at DESC, p.id DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );
        let mut rows = sqlx::query_as::<_, ProductRow>(&page_query);
        if let Some(category) = params.category {
            rows = rows.bind(category);
        }
        if let Some(pattern) = &search_pattern {
            rows = rows.bind(pattern);
        }
        let rows = rows
            .bind(PAGE_SIZE)
            .bind(page_offset(page, PAGE_SIZE))
            .fetch_all(pool)
            .await?;

        Ok(ProductPage {
            rows,
            total,
            current_page: page,
        })
    }

    /// Find a product by id, joined with its category name.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p \
             LEFT JOIN categories c ON p.category_id = c.id \
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The stored `images` column for a product, or `None` when the product
    /// does not exist. Used to compute the orphan set before a mutation.
    pub async fn stored_images(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Option<serde_json::Value>>, sqlx::Error> {
        let row: Option<(Option<serde_json::Value>,)> =
            sqlx::query_as("SELECT images FROM products WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(images,)| images))
    }

    /// Insert a product, returning the generated id.
    pub async fn create(pool: &PgPool, input: &ProductInput) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO products (name, description, price, category_id, images) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.price)
        .bind(input.category_id)
        .bind(images_to_value(&input.images))
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Update a product in place, bumping `updated_at`. Returns `false` when
    /// no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET name = $1, description = $2, price = $3, \
             category_id = $4, images = $5, updated_at = now() WHERE id = $6",
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.price)
        .bind(input.category_id)
        .bind(images_to_value(&input.images))
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a product. Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
