mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, build_test_app, post_multipart_image_auth};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const GIF_MAGIC: &[u8] = b"GIF89a";

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_stores_the_file_and_returns_its_public_path(pool: PgPool) {
    let app = build_test_app(pool);
    let token = app.login_admin().await;

    let response =
        post_multipart_image_auth(&app, "/api/upload", "watch.png", PNG_MAGIC, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "File uploaded successfully");

    let filename = json["filename"].as_str().unwrap();
    assert!(filename.ends_with(".png"));
    // Generated name, not the client's.
    assert_ne!(filename, "watch.png");
    assert_eq!(
        json["path"].as_str().unwrap(),
        format!("/uploads-menggaris/{filename}")
    );

    assert!(app.assets.contains(filename).await);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_accepts_every_allow_listed_format(pool: PgPool) {
    let app = build_test_app(pool);
    let token = app.login_admin().await;

    let response =
        post_multipart_image_auth(&app, "/api/upload", "anim.gif", GIF_MAGIC, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["filename"].as_str().unwrap().ends_with(".gif"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_requires_authentication(pool: PgPool) {
    let app = build_test_app(pool);

    let response =
        post_multipart_image_auth(&app, "/api/upload", "watch.png", PNG_MAGIC, "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_rejects_disallowed_extensions(pool: PgPool) {
    let app = build_test_app(pool);
    let token = app.login_admin().await;

    let response =
        post_multipart_image_auth(&app, "/api/upload", "notes.txt", b"plain text", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Only image files are allowed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_rejects_non_image_bytes_behind_an_image_extension(pool: PgPool) {
    let app = build_test_app(pool);
    let token = app.login_admin().await;

    let response =
        post_multipart_image_auth(&app, "/api/upload", "fake.png", b"not an image", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Only image files are allowed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_rejects_files_over_the_size_limit(pool: PgPool) {
    let app = build_test_app(pool);
    let token = app.login_admin().await;

    let mut oversized = PNG_MAGIC.to_vec();
    oversized.resize(5 * 1024 * 1024 + 1, 0);

    let response =
        post_multipart_image_auth(&app, "/api/upload", "huge.png", &oversized, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "File size too large");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn request_without_an_image_field_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let token = app.login_admin().await;

    // A field with a different name is ignored; no file ends up stored.
    let response = {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"attachment\"; filename=\"watch.png\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             irrelevant\r\n\
             --{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body))
            .unwrap();
        app.router.clone().oneshot(request).await.unwrap()
    };

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No file uploaded");
}
