//! Cart route handlers.
//!
//! All cart routes act on the session user's own cart; there is no way to
//! address another user's cart.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use partshop_core::ProductId;
use serde::Deserialize;

use super::{ApiJson, ApiPath};
use crate::error::Result;
use crate::middleware::CurrentCaller;
use crate::models::CartView;
use crate::services::CartService;
use crate::state::AppState;

/// Add-to-cart request body.
///
/// A missing or non-positive `quantity` counts as 1.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: i32,
    #[serde(default)]
    pub quantity: i64,
}

/// Show the caller's valued cart.
pub async fn show(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> Result<Json<CartView>> {
    let cart = CartService::new(state.store()).get(&caller).await?;
    Ok(Json(cart))
}

/// Add a product to the caller's cart.
pub async fn add(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    ApiJson(body): ApiJson<AddToCartRequest>,
) -> Result<StatusCode> {
    CartService::new(state.store())
        .add(&caller, ProductId::new(body.product_id), body.quantity)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a product line from the caller's cart.
pub async fn remove(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode> {
    CartService::new(state.store())
        .remove(&caller, ProductId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Empty the caller's cart.
pub async fn clear(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> Result<StatusCode> {
    CartService::new(state.store()).clear(&caller).await?;
    Ok(StatusCode::NO_CONTENT)
}
