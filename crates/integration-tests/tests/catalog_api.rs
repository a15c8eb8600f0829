//! Integration tests for product listing and admin product management.

use axum::http::StatusCode;
use partshop_integration_tests::TestApp;
use serde_json::{Value, json};

fn ids(page: &Value) -> Vec<i64> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

fn wiper() -> Value {
    json!({
        "name": "Wiper blade",
        "description": "600 mm frameless",
        "price": 390,
        "image": "/images/wiper.jpg"
    })
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_defaults_to_first_page_of_three() {
    let app = TestApp::new().await;
    let page = app.client().get("/api/products").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(ids(&page.body), vec![1, 2, 3]);
    assert_eq!(page.body["page"], 1);
    assert_eq!(page.body["totalPages"], 3);
}

#[tokio::test]
async fn test_list_last_and_out_of_range_pages() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let last = client.get("/api/products?page=3&limit=3").await;
    assert_eq!(ids(&last.body), vec![7]);

    let beyond = client.get("/api/products?page=9").await;
    assert_eq!(beyond.status, StatusCode::OK);
    assert!(ids(&beyond.body).is_empty());
    assert_eq!(beyond.body["totalPages"], 3);
}

#[tokio::test]
async fn test_list_invalid_query_falls_back_to_defaults() {
    let app = TestApp::new().await;
    let page = app
        .client()
        .get("/api/products?page=abc&limit=-2")
        .await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(ids(&page.body), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_show_product() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let product = client.get("/api/products/2").await;
    assert_eq!(product.status, StatusCode::OK);
    assert_eq!(product.body["id"], 2);
    assert_eq!(product.body["price"].as_f64(), Some(1200.0));

    assert_eq!(client.get("/api/products/99").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_product_id_is_json_bad_request() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client.get("/api/products/abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
}

// =============================================================================
// Admin mutations
// =============================================================================

#[tokio::test]
async fn test_admin_create_assigns_next_id() {
    let app = TestApp::new().await;
    let mut admin = app.admin().await;

    let created = admin.post("/api/products", wiper()).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 8);
    assert_eq!(created.body["name"], "Wiper blade");

    let page = admin.get("/api/products?page=3&limit=3").await;
    assert_eq!(ids(&page.body), vec![7, 8]);
    assert_eq!(app.document().await.products.len(), 8);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = TestApp::new().await;
    let mut admin = app.admin().await;

    let mut body = wiper();
    body["id"] = json!(1);
    let created = admin.post("/api/products", body).await;

    assert_eq!(created.body["id"], 8);
    assert_eq!(app.document().await.products[0].name, "VAZ oil filter");
}

#[tokio::test]
async fn test_customer_cannot_mutate_catalog() {
    let app = TestApp::new().await;
    let before = app.document().await;
    let mut customer = app.customer("buyer@shop.local").await;

    let response = customer.post("/api/products", wiper()).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error(), "insufficient permissions");

    assert_eq!(customer.put("/api/products/1", wiper()).await.status, StatusCode::FORBIDDEN);
    assert_eq!(customer.delete("/api/products/1").await.status, StatusCode::FORBIDDEN);

    assert_eq!(app.document().await.products, before.products);
}

#[tokio::test]
async fn test_anonymous_cannot_mutate_catalog() {
    let app = TestApp::new().await;
    let response = app.client().post("/api/products", wiper()).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;
    let mut admin = app.admin().await;

    let mut no_name = wiper();
    no_name["name"] = json!("");
    assert_eq!(admin.post("/api/products", no_name).await.status, StatusCode::BAD_REQUEST);

    let mut free = wiper();
    free["price"] = json!(0);
    assert_eq!(admin.post("/api/products", free).await.status, StatusCode::BAD_REQUEST);

    assert_eq!(
        admin
            .post("/api/products", json!({"name": "X", "description": "Y"}))
            .await
            .status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(app.document().await.products.len(), 7);
}

#[tokio::test]
async fn test_update_keeps_id_and_replaces_fields() {
    let app = TestApp::new().await;
    let mut admin = app.admin().await;

    let updated = admin.put("/api/products/4", wiper()).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], 4);

    let shown = admin.get("/api/products/4").await;
    assert_eq!(shown.body["name"], "Wiper blade");
    assert_eq!(shown.body["price"].as_f64(), Some(390.0));
}

#[tokio::test]
async fn test_update_and_delete_unknown_product() {
    let app = TestApp::new().await;
    let mut admin = app.admin().await;

    assert_eq!(admin.put("/api/products/99", wiper()).await.status, StatusCode::NOT_FOUND);
    assert_eq!(admin.delete("/api/products/99").await.status, StatusCode::NOT_FOUND);
    assert_eq!(admin.delete("/api/products/0").await.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_create_does_not_reuse_max_id() {
    let app = TestApp::new().await;
    let mut admin = app.admin().await;

    assert_eq!(admin.delete("/api/products/3").await.status, StatusCode::NO_CONTENT);
    assert_eq!(admin.get("/api/products/3").await.status, StatusCode::NOT_FOUND);

    let created = admin.post("/api/products", wiper()).await;
    assert_eq!(created.body["id"], 8);
}
