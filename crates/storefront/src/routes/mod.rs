//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! # Auth
//! POST   /api/register       - Create a customer account
//! POST   /api/login          - Start a session
//! POST   /api/logout         - End the session
//! GET    /api/me             - Current user
//!
//! # Products
//! GET    /api/products       - Paginated listing (?page=&limit=)
//! GET    /api/products/{id}  - Single product
//! POST   /api/products       - Create (admin)
//! PUT    /api/products/{id}  - Replace (admin)
//! DELETE /api/products/{id}  - Delete (admin)
//!
//! # Cart (requires auth)
//! GET    /api/cart           - Valued cart
//! POST   /api/cart           - Add item
//! DELETE /api/cart/{id}      - Remove item
//! POST   /api/cart/clear     - Empty the cart
//! ```

pub mod auth;
pub mod cart;
pub mod products;

use axum::{
    Router,
    extract::{FromRequest, FromRequestParts},
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// JSON body extractor whose rejections are `AppError::Validation`, so a
/// malformed body gets the same `{"error": ...}` shape as every other
/// failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor with the same rejection handling as [`ApiJson`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).post(cart::add))
        .route("/clear", post(cart::clear))
        .route("/{id}", axum::routing::delete(cart::remove))
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
}
