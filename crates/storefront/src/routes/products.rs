//! Product route handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use partshop_core::ProductId;
use serde::Deserialize;

use super::{ApiJson, ApiPath};
use crate::error::Result;
use crate::middleware::CurrentCaller;
use crate::models::{Product, ProductInput, ProductPage};
use crate::services::{CatalogService, DEFAULT_PAGE_SIZE};
use crate::state::AppState;

/// Pagination query parameters.
///
/// Kept as raw strings so a malformed value falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationQuery {
    /// Requested page, or 1.
    #[must_use]
    pub fn page(&self) -> usize {
        positive_or(self.page.as_deref(), 1)
    }

    /// Requested page size, or [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn limit(&self) -> usize {
        positive_or(self.limit.as_deref(), DEFAULT_PAGE_SIZE)
    }
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// List one page of products.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ProductPage>> {
    let page = CatalogService::new(state.store())
        .list(query.page(), query.limit())
        .await?;
    Ok(Json(page))
}

/// Show a single product.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Product>> {
    let product = CatalogService::new(state.store())
        .get(ProductId::new(id))
        .await?;
    Ok(Json(product))
}

/// Create a product (admin).
pub async fn create(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = CatalogService::new(state.store())
        .create(&caller, input)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's fields (admin).
pub async fn update(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<Json<Product>> {
    let product = CatalogService::new(state.store())
        .update(&caller, ProductId::new(id), input)
        .await?;
    Ok(Json(product))
}

/// Delete a product (admin).
pub async fn destroy(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode> {
    CatalogService::new(state.store())
        .delete(&caller, ProductId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
