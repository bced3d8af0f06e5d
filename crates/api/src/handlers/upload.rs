//! Handler for image upload (`POST /api/upload`, multipart).

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use menggaris_core::upload::validate_image;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Successful upload response.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    /// Generated filename to reference from a product's `images` list.
    pub filename: String,
    /// Public path the file is served at.
    pub path: String,
}

/// POST /api/upload
///
/// Accept a single image in the multipart field `image`. The file must pass
/// the extension and content-sniffing allow-list and stay under 5 MiB.
/// Requires auth.
pub async fn upload(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field
            .file_name()
            .ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?
            .to_string();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let extension = validate_image(&original_name, &bytes)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let filename = state
            .assets
            .store(&extension, &bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Upload write error: {e}")))?;

        tracing::info!(
            %filename,
            size = bytes.len(),
            admin_id = auth.user_id,
            "File uploaded"
        );

        let path = state.assets.public_url(&filename);
        return Ok(Json(UploadResponse {
            message: "File uploaded successfully",
            filename,
            path,
        }));
    }

    Err(AppError::BadRequest("No file uploaded".into()))
}
