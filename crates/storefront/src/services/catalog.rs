//! Catalog operations.
//!
//! The free functions work on a product slice from an already-loaded
//! document; [`CatalogService`] wraps them in store transactions and the
//! admin role check.

use partshop_core::{ProductId, Role};
use tracing::{info, instrument};

use super::policy::require_role;
use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{Caller, Product, ProductInput, ProductPage};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Next free product ID: one past the highest existing ID, or 1.
///
/// # Errors
///
/// Returns `AppError::Conflict` when the highest ID is already `i32::MAX`.
pub fn next_product_id(products: &[Product]) -> Result<ProductId> {
    products
        .iter()
        .map(|p| p.id)
        .max()
        .map_or(Some(ProductId::new(1)), |id| id.checked_next())
        .ok_or_else(|| AppError::Conflict("product IDs exhausted".to_string()))
}

/// First product with `id`.
#[must_use]
pub fn find_product(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// Slice the catalog into pages of `limit` products.
///
/// `page` is 1-based. Values below 1 are treated as 1. A page past the end
/// yields no items; `total_pages` is unaffected by the requested page.
#[must_use]
pub fn list_page(products: &[Product], page: usize, limit: usize) -> ProductPage {
    let page = page.max(1);
    let limit = limit.max(1);
    let start = (page - 1).saturating_mul(limit);

    ProductPage {
        items: products.iter().skip(start).take(limit).cloned().collect(),
        page,
        total_pages: products.len().div_ceil(limit),
    }
}

/// Check the fields every stored product must have.
///
/// # Errors
///
/// Returns `AppError::Validation` if the name or description is empty or the
/// price is not positive.
pub fn validate_product(input: &ProductInput) -> Result<()> {
    if input.name.is_empty() || input.description.is_empty() {
        return Err(AppError::Validation(
            "name and description are required".to_string(),
        ));
    }
    if !input.price.is_positive() {
        return Err(AppError::Validation("price must be positive".to_string()));
    }
    Ok(())
}

/// Validate `input`, give it a fresh ID, and append it.
///
/// # Errors
///
/// Returns `AppError::Validation` if `input` is invalid and
/// `AppError::Conflict` if no product ID is left.
pub fn create_product(products: &mut Vec<Product>, input: ProductInput) -> Result<Product> {
    validate_product(&input)?;
    let product = input.into_product(next_product_id(products)?);
    products.push(product.clone());
    Ok(product)
}

/// Replace the product with `id` by `input`, keeping the ID.
///
/// # Errors
///
/// Returns `AppError::Validation` for a non-positive ID or invalid input,
/// `AppError::NotFound` if no product has `id`.
pub fn update_product(
    products: &mut [Product],
    id: ProductId,
    input: ProductInput,
) -> Result<Product> {
    ensure_valid_id(id)?;
    validate_product(&input)?;
    let slot = products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| product_not_found(id))?;
    *slot = input.into_product(id);
    Ok(slot.clone())
}

/// Remove the product with `id`, keeping the order of the rest.
///
/// Carts that reference the product are left alone.
///
/// # Errors
///
/// Returns `AppError::Validation` for a non-positive ID and
/// `AppError::NotFound` if no product has `id`.
pub fn delete_product(products: &mut Vec<Product>, id: ProductId) -> Result<Product> {
    ensure_valid_id(id)?;
    let index = products
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| product_not_found(id))?;
    Ok(products.remove(index))
}

pub(crate) fn ensure_valid_id(id: ProductId) -> Result<()> {
    if id.is_positive() {
        Ok(())
    } else {
        Err(AppError::Validation(format!("invalid product id: {id}")))
    }
}

pub(crate) fn product_not_found(id: ProductId) -> AppError {
    AppError::NotFound(format!("product {id} not found"))
}

/// Catalog reads (public) and admin-only mutations against the store file.
pub struct CatalogService<'a> {
    store: &'a DocumentStore,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// One page of the catalog. No authentication needed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the document cannot be loaded.
    pub async fn list(&self, page: usize, limit: usize) -> Result<ProductPage> {
        let store = self.store.load().await?;
        Ok(list_page(&store.products, page, limit))
    }

    /// A single product. No authentication needed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has `id`.
    pub async fn get(&self, id: ProductId) -> Result<Product> {
        let store = self.store.load().await?;
        find_product(&store.products, id)
            .cloned()
            .ok_or_else(|| product_not_found(id))
    }

    /// Add a product. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized`/`Forbidden` from the role check,
    /// `AppError::Validation` for invalid input.
    #[instrument(skip(self, input))]
    pub async fn create(&self, caller: &Caller, input: ProductInput) -> Result<Product> {
        let product = self
            .store
            .update(|doc| {
                require_role(doc, caller, Role::Admin)?;
                create_product(&mut doc.products, input)
            })
            .await?;
        info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Replace a product's fields. Admin only.
    ///
    /// # Errors
    ///
    /// As [`CatalogService::create`], plus `AppError::NotFound` for an
    /// unknown ID.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        caller: &Caller,
        id: ProductId,
        input: ProductInput,
    ) -> Result<Product> {
        let product = self
            .store
            .update(|doc| {
                require_role(doc, caller, Role::Admin)?;
                update_product(&mut doc.products, id, input)
            })
            .await?;
        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Remove a product. Admin only.
    ///
    /// # Errors
    ///
    /// As [`CatalogService::update`].
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: &Caller, id: ProductId) -> Result<()> {
        self.store
            .update(|doc| {
                require_role(doc, caller, Role::Admin)?;
                delete_product(&mut doc.products, id)
            })
            .await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use partshop_core::{Price, UserId};

    use super::*;
    use crate::db::default_store;

    fn input(name: &str, price: i64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: "Spare part".to_string(),
            price: Price::from_units(price),
            image: String::new(),
        }
    }

    #[test]
    fn test_next_product_id_empty() {
        assert_eq!(next_product_id(&[]).unwrap(), ProductId::new(1));
    }

    #[test]
    fn test_next_product_id_uses_max_not_len() {
        let mut products = default_store().products;
        products.retain(|p| p.id != ProductId::new(3));
        assert_eq!(next_product_id(&products).unwrap(), ProductId::new(8));
    }

    #[test]
    fn test_create_product_at_max_id_is_conflict() {
        let mut products = default_store().products;
        products[0].id = ProductId::new(i32::MAX);
        let before = products.clone();

        assert!(matches!(
            create_product(&mut products, input("Clutch disc", 3100)),
            Err(AppError::Conflict(_))
        ));
        assert_eq!(products, before);
    }

    #[test]
    fn test_find_product() {
        let products = default_store().products;
        assert_eq!(
            find_product(&products, ProductId::new(2)).unwrap().id,
            ProductId::new(2)
        );
        assert!(find_product(&products, ProductId::new(42)).is_none());
    }

    #[test]
    fn test_list_page_limit_three_of_seven() {
        let products = default_store().products;

        let first = list_page(&products, 1, 3);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.items[0].id, ProductId::new(1));

        let last = list_page(&products, 3, 3);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].id, ProductId::new(7));

        let beyond = list_page(&products, 10, 3);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);
        assert_eq!(beyond.page, 10);
    }

    #[test]
    fn test_list_page_empty_catalog() {
        let page = list_page(&[], 1, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_list_page_huge_page_does_not_overflow() {
        let products = default_store().products;
        assert!(list_page(&products, usize::MAX, usize::MAX).items.is_empty());
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let mut products = Vec::new();
        assert!(matches!(
            create_product(&mut products, input("", 10)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            create_product(&mut products, input("Wiper", 0)),
            Err(AppError::Validation(_))
        ));
        let mut no_description = input("Wiper", 10);
        no_description.description.clear();
        assert!(matches!(
            create_product(&mut products, no_description),
            Err(AppError::Validation(_))
        ));
        assert!(products.is_empty());
    }

    #[test]
    fn test_create_ids_increase_and_are_not_reused() {
        let mut products = Vec::new();
        let a = create_product(&mut products, input("A", 1)).unwrap();
        let b = create_product(&mut products, input("B", 1)).unwrap();
        delete_product(&mut products, a.id).unwrap();
        let c = create_product(&mut products, input("C", 1)).unwrap();

        assert!(a.id < b.id && b.id < c.id);
        assert_eq!(c.id, ProductId::new(3));
    }

    #[test]
    fn test_update_preserves_id() {
        let mut products = default_store().products;
        let updated =
            update_product(&mut products, ProductId::new(4), input("Oil 5W-30", 2300)).unwrap();
        assert_eq!(updated.id, ProductId::new(4));
        assert_eq!(products[3].name, "Oil 5W-30");
        assert_eq!(products.len(), 7);
    }

    #[test]
    fn test_update_distinguishes_not_found_from_invalid() {
        let mut products = default_store().products;
        assert!(matches!(
            update_product(&mut products, ProductId::new(99), input("X", 1)),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            update_product(&mut products, ProductId::new(1), input("X", -1)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            update_product(&mut products, ProductId::new(0), input("X", 1)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_delete_keeps_order() {
        let mut products = default_store().products;
        delete_product(&mut products, ProductId::new(2)).unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6, 7]);

        assert!(matches!(
            delete_product(&mut products, ProductId::new(2)),
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_service_admin_create_gets_next_id() {
        let store = crate::test_support::seeded_store().await;
        let catalog = CatalogService::new(&store);

        let product = catalog
            .create(&Caller::user(UserId::new(1)), input("X", 10))
            .await
            .unwrap();
        assert_eq!(product.id, ProductId::new(8));
        assert_eq!(catalog.list(3, 3).await.unwrap().total_pages, 3);
    }

    #[tokio::test]
    async fn test_service_non_admin_create_is_forbidden_and_store_unchanged() {
        let store = crate::test_support::seeded_store().await;
        let customer = crate::test_support::register_customer(&store, "buyer@shop.local").await;
        let before = store.load().await.unwrap();

        let result = CatalogService::new(&store)
            .create(&Caller::user(customer), input("X", 10))
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert_eq!(store.load().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_service_anonymous_delete_is_unauthorized() {
        let store = crate::test_support::seeded_store().await;
        let result = CatalogService::new(&store)
            .delete(&Caller::anonymous(), ProductId::new(1))
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
