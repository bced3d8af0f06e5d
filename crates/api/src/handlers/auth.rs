//! Handler for the `/auth` resource (admin login).

use axum::extract::State;
use menggaris_core::error::CoreError;
use menggaris_core::types::DbId;
use menggaris_db::repositories::AdminUserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Request body for `POST /api/auth/login`. Fields are optional so missing
/// input maps to 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserInfo,
}

/// Public admin info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
}

/// POST /api/auth/login
///
/// Authenticate with username + password. Returns a 24-hour bearer token.
/// The failure message is identical for an unknown username and a wrong
/// password so the endpoint does not confirm which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (username, password) = match (input.username, input.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Username and password are required".into(),
            )))
        }
    };

    let user = AdminUserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = user.id, "Admin logged in");

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
        },
    }))
}
