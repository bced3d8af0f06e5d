//! Repository for the `categories` table.

use menggaris_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryInput};

/// Column list for `categories` queries.
const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories ordered by name ascending. Cardinality is assumed
    /// small, so there is no pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Whether a category with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Insert a category. Duplicate names surface as a unique constraint
    /// violation on `uq_categories_name`.
    pub async fn create(pool: &PgPool, input: &CategoryInput) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description) VALUES ($1, $2) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Update a category in place, bumping `updated_at`. Returns `None` when
    /// no row matches the id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoryInput,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $1, description = $2, updated_at = now() \
             WHERE id = $3 RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Returns `false` when no row matched. Callers must
    /// check [`Self::product_count`] first; the foreign key also enforces it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of products referencing this category.
    pub async fn product_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM products WHERE category_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
