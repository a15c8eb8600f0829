//! Partshop storefront library.
//!
//! The store access layer, the catalog, identity and cart operations, and
//! the JSON API that exposes them. The `partshop-storefront` binary serves
//! [`app`]; the CLI and the integration tests use the same pieces directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, extract::Request, middleware::from_fn, routing::get};
use tower_http::trace::TraceLayer;
use tracing::{field, info_span};

use crate::state::AppState;

/// Build the full application router.
///
/// Includes the API under `/api`, the liveness check, request IDs, request
/// tracing, and the session layer. Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::routes())
        .layer(session_layer)
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not touch the store.
async fn health() -> &'static str {
    "ok"
}
