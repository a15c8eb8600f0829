//! Integration tests for Partshop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p partshop-integration-tests
//! ```
//!
//! Every [`TestApp`] gets its own store document in a fresh temp directory,
//! seeded like a first server start. Requests go straight into the axum
//! router with `tower::ServiceExt::oneshot`; no socket is bound. A
//! [`Client`] plays one browser: it keeps the session cookie the server
//! hands out and sends it back on later requests.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use partshop_storefront::config::StorefrontConfig;
use partshop_storefront::db::DocumentStore;
use partshop_storefront::models::Store;
use partshop_storefront::state::AppState;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Credentials of the seeded administrator.
pub const ADMIN_EMAIL: &str = "admin@shop.local";
pub const ADMIN_PASSWORD: &str = "admin123";

/// A storefront wired to a private store document.
pub struct TestApp {
    router: Router,
    data_path: PathBuf,
}

impl TestApp {
    /// Start an app over a freshly seeded store document.
    pub async fn new() -> Self {
        let data_path = std::env::temp_dir()
            .join(format!("partshop-it-{}", Uuid::new_v4()))
            .join("store.json");
        let store = DocumentStore::new(data_path.clone());
        store.ensure_initialized().await.unwrap();

        let config = StorefrontConfig {
            data_path: data_path.clone(),
            ..StorefrontConfig::default()
        };
        let router = partshop_storefront::app(AppState::with_store(config, store));

        Self { router, data_path }
    }

    /// A new client with no session.
    #[must_use]
    pub fn client(&self) -> Client {
        Client {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// A client logged in as the seeded admin.
    pub async fn admin(&self) -> Client {
        let mut client = self.client();
        let response = client.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        assert_eq!(response.status, StatusCode::OK);
        client
    }

    /// A client registered and logged in as a new customer.
    pub async fn customer(&self, email: &str) -> Client {
        let mut client = self.client();
        let response = client
            .post(
                "/api/register",
                serde_json::json!({"name": "Customer", "email": email, "password": "secret"}),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        let response = client.login(email, "secret").await;
        assert_eq!(response.status, StatusCode::OK);
        client
    }

    /// Read the store document straight from disk.
    pub async fn document(&self) -> Store {
        let bytes = tokio::fs::read(&self.data_path).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Location of the store document.
    #[must_use]
    pub fn data_path(&self) -> &PathBuf {
        &self.data_path
    }
}

/// Status and parsed JSON body of a response. `body` is `Null` when the
/// response had no body.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// The `error` message of an error body.
    #[must_use]
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// One cookie-carrying API client.
pub struct Client {
    router: Router,
    cookie: Option<String>,
}

impl Client {
    /// Send a request, carrying and updating the session cookie.
    pub async fn request(&mut self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap_or_default();
            self.cookie = pair
                .split_once('=')
                .filter(|(_, value)| !value.is_empty())
                .map(|_| pair.to_string());
        }

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&mut self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&mut self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Log in, keeping the session cookie on success.
    pub async fn login(&mut self, email: &str, password: &str) -> TestResponse {
        self.post(
            "/api/login",
            serde_json::json!({"email": email, "password": password}),
        )
        .await
    }

    /// Whether the client currently holds a session cookie.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }
}
