//! Handlers for the `/settings` resource (single-row site configuration).

use axum::extract::State;
use axum::response::IntoResponse;
use menggaris_db::models::settings::SettingsInput;
use menggaris_db::repositories::SettingsRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/settings
///
/// The most recently written settings row, or an empty object when none
/// exists yet. Never 404. Public.
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let body = match SettingsRepo::latest(&state.pool).await? {
        Some(settings) => serde_json::to_value(settings)
            .map_err(|e| AppError::Internal(format!("Settings serialization error: {e}")))?,
        None => serde_json::json!({}),
    };

    Ok(Json(body))
}

/// PUT /api/settings
///
/// Upsert the settings row; last write wins. Field contents are free text
/// and not validated. Requires auth.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SettingsInput>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::upsert(&state.pool, &input).await?;

    tracing::info!(settings_id = settings.id, admin_id = auth.user_id, "Settings updated");

    Ok(Json(MessageResponse {
        message: "Settings updated successfully",
    }))
}
