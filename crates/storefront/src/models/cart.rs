//! Cart types, both stored and valued.

use partshop_core::{Price, ProductId, UserId};
use serde::{Deserialize, Serialize};

use super::Product;
use super::document::null_as_empty;

/// One product line inside a stored cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Referenced product. May dangle after the product is deleted.
    pub product_id: ProductId,
    /// Always at least 1.
    pub quantity: u32,
}

/// A user's stored cart.
///
/// At most one cart per user, and at most one item per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: UserId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart for `user_id`.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
        }
    }

    /// The item for `product_id`, if any.
    #[must_use]
    pub fn item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Mutable access to the item for `product_id`.
    #[must_use]
    pub fn item_mut(&mut self, product_id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.product_id == product_id)
    }
}

/// A cart line joined with its product's current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Price,
}

/// A valued cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: Price,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |n, line| n.saturating_add(line.quantity))
    }
}
