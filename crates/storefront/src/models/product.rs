//! Catalog product types.

use partshop_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, strictly positive ID. Never changes after creation.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image path or URI.
    #[serde(default)]
    pub image: String,
}

/// Candidate fields for creating or replacing a product.
///
/// Any `id` the client sends is ignored: create assigns a fresh one and
/// update keeps the existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "zero_price")]
    pub price: Price,
    #[serde(default)]
    pub image: String,
}

const fn zero_price() -> Price {
    Price::ZERO
}

impl ProductInput {
    /// Build the stored record for this candidate under `id`.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
        }
    }
}

/// One page of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub page: usize,
    pub total_pages: usize,
}
