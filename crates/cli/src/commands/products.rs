//! `partshop products list`.

use partshop_storefront::db::DocumentStore;
use partshop_storefront::models::ProductPage;
use partshop_storefront::services::CatalogService;

use super::CommandError;

/// Log one page of the catalog and return it.
pub async fn list(
    store: &DocumentStore,
    page: usize,
    limit: usize,
) -> Result<ProductPage, CommandError> {
    let result = CatalogService::new(store).list(page, limit).await?;

    tracing::info!(
        "Page {} of {} ({} products)",
        result.page,
        result.total_pages,
        result.items.len()
    );
    for product in &result.items {
        tracing::info!("#{} {} - {}", product.id, product.name, product.price);
    }

    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_reads_seeded_catalog() {
        let dir = std::env::temp_dir().join(format!("partshop-cli-{}", uuid::Uuid::new_v4()));
        let store = DocumentStore::new(dir.join("store.json"));
        store.ensure_initialized().await.unwrap();

        let page = list(&store, 3, 3).await.unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_missing_document_fails() {
        let dir = std::env::temp_dir().join(format!("partshop-cli-{}", uuid::Uuid::new_v4()));
        let store = DocumentStore::new(dir.join("store.json"));
        assert!(list(&store, 1, 3).await.is_err());
    }
}
