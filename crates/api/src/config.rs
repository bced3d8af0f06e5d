use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Enumerated once at startup; no hot-reload. Missing secrets fail fast.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded images are written to (default: `uploads-menggaris`).
    pub upload_dir: PathBuf,
    /// Bootstrap admin username, created at startup if absent.
    pub admin_username: String,
    /// Bootstrap admin password, hashed before storage.
    pub admin_password: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Required | Default             |
    /// |------------------------|----------|---------------------|
    /// | `HOST`                 | no       | `0.0.0.0`           |
    /// | `PORT`                 | no       | `5000`              |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                |
    /// | `UPLOAD_DIR`           | no       | `uploads-menggaris` |
    /// | `ADMIN_USERNAME`       | **yes**  | --                  |
    /// | `ADMIN_PASSWORD`       | **yes**  | --                  |
    /// | `JWT_SECRET`           | **yes**  | --                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads-menggaris".into()),
        );

        let admin_username =
            std::env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set");
        let admin_password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            admin_username,
            admin_password,
            jwt,
        }
    }
}
