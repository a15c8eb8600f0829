//! Cart operations.
//!
//! Carts are scoped to the caller: every [`CartService`] method resolves the
//! session user first and only ever touches that user's cart.
//!
//! Deleting a product does not clean up carts. Valuation skips items whose
//! product is gone, so such lines disappear from the view and the total
//! without an error.

use std::collections::HashMap;

use partshop_core::{Price, ProductId, UserId};
use tracing::{debug, instrument};

use super::catalog::{ensure_valid_id, find_product, product_not_found};
use super::policy::require_authenticated;
use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{Caller, CartItem, CartLineView, CartView, Product, Store};

/// Clamp a requested quantity into the stored range. Anything below 1
/// becomes 1.
#[must_use]
pub fn normalize_quantity(quantity: i64) -> u32 {
    if quantity <= 0 {
        1
    } else {
        u32::try_from(quantity).unwrap_or(u32::MAX)
    }
}

fn total_too_large() -> AppError {
    AppError::Validation("cart total is too large".to_string())
}

/// Value `user_id`'s cart against the current catalog.
///
/// # Errors
///
/// Returns `AppError::Validation` if a line total or the cart total does not
/// fit in a `Decimal`.
pub fn cart_view(store: &Store, user_id: UserId) -> Result<CartView> {
    let Some(cart) = store.cart(user_id) else {
        return Ok(CartView::empty());
    };

    let products: HashMap<ProductId, &Product> =
        store.products.iter().map(|p| (p.id, p)).collect();

    let mut items = Vec::with_capacity(cart.items.len());
    let mut total = Price::ZERO;
    for item in &cart.items {
        let Some(product) = products.get(&item.product_id) else {
            continue;
        };
        let line_total = product
            .price
            .checked_times(item.quantity)
            .ok_or_else(total_too_large)?;
        total = total.checked_add(line_total).ok_or_else(total_too_large)?;
        items.push(CartLineView {
            product: (*product).clone(),
            quantity: item.quantity,
            line_total,
        });
    }

    Ok(CartView { items, total })
}

/// Add `quantity` units of a product to `user_id`'s cart.
///
/// Creates the cart on first use. An existing line for the product is
/// incremented rather than duplicated.
///
/// # Errors
///
/// Returns `AppError::Validation` for a non-positive product ID or when the
/// resulting line total would not fit in a `Decimal`, and
/// `AppError::NotFound` if the product does not exist.
pub fn add_item(
    store: &mut Store,
    user_id: UserId,
    product_id: ProductId,
    quantity: i64,
) -> Result<()> {
    ensure_valid_id(product_id)?;
    let Some(price) = find_product(&store.products, product_id).map(|p| p.price) else {
        return Err(product_not_found(product_id));
    };
    let quantity = normalize_quantity(quantity);

    let merged = store
        .cart(user_id)
        .and_then(|cart| cart.item(product_id))
        .map_or(quantity, |item| item.quantity.saturating_add(quantity));
    if price.checked_times(merged).is_none() {
        return Err(total_too_large());
    }

    let cart = store.cart_or_insert(user_id);
    match cart.item_mut(product_id) {
        Some(item) => item.quantity = merged,
        None => cart.items.push(CartItem {
            product_id,
            quantity,
        }),
    }
    Ok(())
}

/// Drop the line for `product_id` from `user_id`'s cart.
///
/// Returns whether a line was removed. A missing cart or line is not an
/// error.
///
/// # Errors
///
/// Returns `AppError::Validation` for a non-positive product ID.
pub fn remove_item(store: &mut Store, user_id: UserId, product_id: ProductId) -> Result<bool> {
    ensure_valid_id(product_id)?;
    let Some(cart) = store.cart_mut(user_id) else {
        return Ok(false);
    };
    let before = cart.items.len();
    cart.items.retain(|item| item.product_id != product_id);
    Ok(cart.items.len() != before)
}

/// Empty `user_id`'s cart, keeping the cart record. Returns whether a cart
/// existed.
pub fn clear_cart(store: &mut Store, user_id: UserId) -> bool {
    store.cart_mut(user_id).is_some_and(|cart| {
        cart.items.clear();
        true
    })
}

/// The caller's own cart, read and written through the store file.
pub struct CartService<'a> {
    store: &'a DocumentStore,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// The caller's valued cart. Empty if they never added anything.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` without a valid session, otherwise as
    /// [`cart_view`].
    pub async fn get(&self, caller: &Caller) -> Result<CartView> {
        let store = self.store.load().await?;
        let user = require_authenticated(&store, caller)?;
        cart_view(&store, user.id)
    }

    /// Add to the caller's cart. See [`add_item`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` without a valid session, otherwise as
    /// [`add_item`].
    #[instrument(skip(self))]
    pub async fn add(&self, caller: &Caller, product_id: ProductId, quantity: i64) -> Result<()> {
        self.store
            .update(|doc| {
                let user_id = require_authenticated(doc, caller)?.id;
                add_item(doc, user_id, product_id, quantity)
            })
            .await?;
        debug!(%product_id, "Cart item added");
        Ok(())
    }

    /// Remove a line from the caller's cart. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` without a valid session and
    /// `AppError::Validation` for a non-positive product ID.
    #[instrument(skip(self))]
    pub async fn remove(&self, caller: &Caller, product_id: ProductId) -> Result<()> {
        let removed = self
            .store
            .update(|doc| {
                let user_id = require_authenticated(doc, caller)?.id;
                remove_item(doc, user_id, product_id)
            })
            .await?;
        debug!(%product_id, removed, "Cart item removed");
        Ok(())
    }

    /// Empty the caller's cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` without a valid session.
    #[instrument(skip(self))]
    pub async fn clear(&self, caller: &Caller) -> Result<()> {
        let existed = self
            .store
            .update(|doc| {
                let user_id = require_authenticated(doc, caller)?.id;
                Ok::<_, AppError>(clear_cart(doc, user_id))
            })
            .await?;
        debug!(existed, "Cart cleared");
        Ok(())
    }
}
