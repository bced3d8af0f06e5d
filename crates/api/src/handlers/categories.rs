//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use menggaris_core::error::CoreError;
use menggaris_core::types::DbId;
use menggaris_db::models::category::CategoryInput;
use menggaris_db::repositories::CategoryRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Request body for category create and update. `name` is optional at the
/// serde level so its absence maps to 400.
#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryPayload {
    /// Reject a missing or empty name; pass the rest through.
    fn validate(self) -> Result<CategoryInput, AppError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation("Category name is required".into()))
            })?;
        Ok(CategoryInput {
            name,
            description: self.description,
        })
    }
}

/// Map a unique constraint violation onto the duplicate-name conflict.
fn on_duplicate_name(err: sqlx::Error) -> AppError {
    if menggaris_db::is_unique_violation(&err) {
        AppError::Core(CoreError::Conflict("Category name already exists".into()))
    } else {
        AppError::Database(err)
    }
}

/// GET /api/categories
///
/// All categories, name ascending. Public.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories
///
/// Create a category. Requires auth.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;

    let category = CategoryRepo::create(&state.pool, &input)
        .await
        .map_err(on_duplicate_name)?;

    tracing::info!(category_id = category.id, name = %category.name, admin_id = auth.user_id, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Category created successfully",
            id: category.id,
        }),
    ))
}

/// PUT /api/categories/{id}
///
/// Update a category. Requires auth.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<CategoryPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;

    let updated = CategoryRepo::update(&state.pool, id, &input)
        .await
        .map_err(on_duplicate_name)?;

    if updated.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, admin_id = auth.user_id, "Category updated");

    Ok(Json(MessageResponse {
        message: "Category updated successfully",
    }))
}

/// DELETE /api/categories/{id}
///
/// Delete a category. Refused while any product references it. Requires auth.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product_count = CategoryRepo::product_count(&state.pool, id).await?;
    if product_count > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot delete category with existing products".into(),
        )));
    }

    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, admin_id = auth.user_id, "Category deleted");

    Ok(Json(MessageResponse {
        message: "Category deleted successfully",
    }))
}
