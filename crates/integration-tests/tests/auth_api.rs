//! Integration tests for registration, login, and sessions.

use axum::http::StatusCode;
use partshop_integration_tests::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};
use serde_json::json;

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_returns_public_user() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client
        .post(
            "/api/register",
            json!({"name": "Ann", "email": "ann@shop.local", "password": "pw1"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 2);
    assert_eq!(response.body["email"], "ann@shop.local");
    assert_eq!(response.body["role"], "user");
    assert!(response.body.get("passwordHash").is_none());
    assert!(!client.has_session(), "registration must not log in");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    let mut client = app.client();
    let body = json!({"name": "Ann", "email": "ann@shop.local", "password": "pw1"});

    assert_eq!(client.post("/api/register", body.clone()).await.status, StatusCode::CREATED);
    let response = client.post("/api/register", body).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error(), "user already exists");
    assert_eq!(app.document().await.users.len(), 2);
}

#[tokio::test]
async fn test_register_missing_fields_is_bad_request() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client
        .post("/api/register", json!({"name": "", "email": "x@y", "password": "pw"}))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = client
        .post("/api/register", json!({"name": "X", "email": "not-an-email", "password": "pw"}))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.document().await.users.len(), 1);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client
        .request(
            axum::http::Method::POST,
            "/api/register",
            Some(json!(["not", "an", "object"])),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
}

// =============================================================================
// Login / Logout
// =============================================================================

#[tokio::test]
async fn test_seeded_admin_can_log_in() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["role"], "admin");
    assert!(client.has_session());
    assert!(response.body.get("passwordHash").is_none());

    let me = client.get("/api/me").await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], ADMIN_EMAIL);
    assert!(me.body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client.login(ADMIN_EMAIL, "wrong").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "invalid email or password");

    let response = client.login("nobody@shop.local", ADMIN_PASSWORD).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "invalid email or password");
}

#[tokio::test]
async fn test_email_is_case_sensitive() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client.login("Admin@shop.local", ADMIN_PASSWORD).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_session_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app.client().get("/api/me").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::new().await;
    let mut client = app.customer("buyer@shop.local").await;
    assert_eq!(client.get("/api/me").await.status, StatusCode::OK);

    let response = client.request(axum::http::Method::POST, "/api/logout", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    assert_eq!(client.get("/api/me").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.client().get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!("ok"));
}
