//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::DocumentStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store document is the only shared
/// resource; all access to it goes through [`DocumentStore`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: DocumentStore,
}

impl AppState {
    /// Create application state backed by the document at
    /// `config.data_path`.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store = DocumentStore::new(config.data_path.clone());
        Self::with_store(config, store)
    }

    /// Create application state around an existing store handle.
    #[must_use]
    pub fn with_store(config: StorefrontConfig, store: DocumentStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the store document handle.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }
}
