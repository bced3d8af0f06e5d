//! Handlers for the `/products` resource, including orphan-image cleanup
//! on update and delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use menggaris_core::catalog::{images_from_value, orphaned_images, total_pages, PAGE_SIZE};
use menggaris_core::error::CoreError;
use menggaris_core::types::DbId;
use menggaris_db::models::product::{Product, ProductInput, ProductSearchParams};
use menggaris_db::repositories::{CategoryRepo, ProductRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Query};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, MessageResponse, PageResponse};
use crate::state::AppState;

/// Request body for product create and update. Required fields are optional
/// at the serde level so their absence maps to 400.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<DbId>,
    pub images: Option<Vec<String>>,
}

impl ProductPayload {
    /// Reject missing required fields and a negative price.
    fn validate(self) -> Result<ProductInput, AppError> {
        let (name, price, category_id) = match (self.name, self.price, self.category_id) {
            (Some(name), Some(price), Some(category_id)) if !name.is_empty() => {
                (name, price, category_id)
            }
            _ => {
                return Err(AppError::Core(CoreError::Validation(
                    "Name, price, and category are required".into(),
                )))
            }
        };

        if !price.is_finite() || price < 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "Price must be a non-negative number".into(),
            )));
        }

        Ok(ProductInput {
            name,
            description: self.description,
            price,
            category_id,
            images: self.images.unwrap_or_default(),
        })
    }
}

/// Verify the referenced category exists before writing the product row.
async fn ensure_category_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if !CategoryRepo::exists(pool, id).await? {
        return Err(AppError::Core(CoreError::Validation(
            "Category does not exist".into(),
        )));
    }
    Ok(())
}

/// GET /api/products
///
/// Paginated listing with optional category and search filters. Public.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductSearchParams>,
) -> AppResult<impl IntoResponse> {
    let page = ProductRepo::list(&state.pool, &params).await?;

    let data: Vec<Product> = page.rows.into_iter().map(Product::from).collect();

    Ok(Json(PageResponse {
        data,
        total: page.total,
        total_pages: total_pages(page.total, PAGE_SIZE),
        current_page: page.current_page,
    }))
}

/// GET /api/products/{id}
///
/// A single product joined with its category name. Public.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(Json(Product::from(row)))
}

/// POST /api/products
///
/// Create a product. Requires auth.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;
    ensure_category_exists(&state.pool, input.category_id).await?;

    let id = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = id, name = %input.name, admin_id = auth.user_id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Product created successfully",
            id,
        }),
    ))
}

/// PUT /api/products/{id}
///
/// Update a product. Any image filename dropped from the previous list is
/// deleted from the asset store after the row commits; cleanup failures are
/// logged and never fail the update. Requires auth.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;

    let stored = ProductRepo::stored_images(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    let previous_images = images_from_value(stored.as_ref());

    ensure_category_exists(&state.pool, input.category_id).await?;

    let updated = ProductRepo::update(&state.pool, id, &input).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    let orphans = orphaned_images(&previous_images, &input.images);
    state.assets.cleanup(&orphans).await;

    tracing::info!(
        product_id = id,
        orphans = orphans.len(),
        admin_id = auth.user_id,
        "Product updated"
    );

    Ok(Json(MessageResponse {
        message: "Product updated successfully",
    }))
}

/// DELETE /api/products/{id}
///
/// Delete a product and best-effort remove every image it referenced.
/// Requires auth.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stored = ProductRepo::stored_images(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    let images = images_from_value(stored.as_ref());

    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    state.assets.cleanup(&images).await;

    tracing::info!(
        product_id = id,
        images = images.len(),
        admin_id = auth.user_id,
        "Product deleted"
    );

    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}
