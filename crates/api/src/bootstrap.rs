//! Idempotent startup step: ensure the bootstrap admin account exists.

use menggaris_db::models::admin_user::CreateAdminUser;
use menggaris_db::repositories::AdminUserRepo;
use menggaris_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Create the configured admin account if it is absent, hashing the
/// password before storage. Safe to run on every startup; an existing
/// account is left untouched.
pub async fn ensure_admin(pool: &DbPool, username: &str, password: &str) -> AppResult<()> {
    if AdminUserRepo::find_by_username(pool, username)
        .await?
        .is_some()
    {
        tracing::debug!(%username, "Admin account already present");
        return Ok(());
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let admin = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            username: username.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, %username, "Default admin account created");
    Ok(())
}
