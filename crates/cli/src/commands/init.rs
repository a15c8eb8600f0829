//! `partshop init`.

use partshop_storefront::db::DocumentStore;

use super::CommandError;

/// Create the store document with seed data unless it already exists.
///
/// Returns whether the file was created.
pub async fn run(store: &DocumentStore) -> Result<bool, CommandError> {
    let created = store.ensure_initialized().await?;
    if created {
        tracing::info!("Created store document at {}", store.path().display());
    } else {
        tracing::info!(
            "Store document already exists at {}, left unchanged",
            store.path().display()
        );
    }
    Ok(created)
}
