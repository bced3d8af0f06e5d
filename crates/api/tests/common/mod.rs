//! Shared harness for HTTP-level integration tests.
//!
//! Builds the production router via [`build_app_router`] so tests exercise
//! the same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery, body limit) the binary uses, with the asset store rooted in a
//! per-test temporary directory.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use menggaris_api::auth::jwt::JwtConfig;
use menggaris_api::auth::password::hash_password;
use menggaris_api::config::ServerConfig;
use menggaris_api::router::build_app_router;
use menggaris_api::state::AppState;
use menggaris_api::storage::AssetStore;
use menggaris_db::models::admin_user::CreateAdminUser;
use menggaris_db::repositories::AdminUserRepo;

/// Secret used to sign test tokens.
pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Default admin credentials used by [`TestApp::login_admin`].
pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test_password_123!";

/// A router plus the temp-dir-backed asset store behind it.
pub struct TestApp {
    pub router: Router,
    pub assets: AssetStore,
    pub pool: PgPool,
    _upload_dir: tempfile::TempDir,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_path_buf(),
        admin_username: TEST_ADMIN_USERNAME.to_string(),
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_hours: 24,
        },
    }
}

/// Build the full application with a per-test upload directory.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("upload tempdir should be created");
    let config = test_config(upload_dir.path());
    let assets = AssetStore::new(upload_dir.path());

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        assets: assets.clone(),
    };

    TestApp {
        router: build_app_router(state, &config),
        assets,
        pool,
        _upload_dir: upload_dir,
    }
}

impl TestApp {
    /// Create the default admin account directly in the database and log in
    /// through the API, returning the bearer token.
    pub async fn login_admin(&self) -> String {
        let password_hash =
            hash_password(TEST_ADMIN_PASSWORD).expect("hashing should succeed");
        AdminUserRepo::create(
            &self.pool,
            &CreateAdminUser {
                username: TEST_ADMIN_USERNAME.to_string(),
                password_hash,
            },
        )
        .await
        .expect("admin creation should succeed");

        let body = serde_json::json!({
            "username": TEST_ADMIN_USERNAME,
            "password": TEST_ADMIN_PASSWORD,
        });
        let response = post_json(self, "/api/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        json["token"]
            .as_str()
            .expect("login response must contain a token")
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router
        .clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &TestApp, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &TestApp, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: &TestApp,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: &TestApp,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(path)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: &TestApp, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Issue a multipart POST with a single `image` field.
pub async fn post_multipart_image_auth(
    app: &TestApp,
    path: &str,
    filename: &str,
    bytes: &[u8],
    token: &str,
) -> Response<Body> {
    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
