//! Persistence for the store document.
//!
//! # Storage: one JSON file
//!
//! The whole application state (products, users, carts) lives in a single
//! UTF-8 JSON document, `data/store.json` by default. Every operation reads
//! and writes the entire document, which is fine for a small catalog and is
//! the scalability boundary of this design. A per-entity backend would have
//! to keep the [`DocumentStore`] load/save/update contract.
//!
//! # Durability
//!
//! Saves overwrite the file in place. A crash or I/O error in the middle of
//! a write can leave a truncated document, which the next load reports as
//! [`RepositoryError::DataCorruption`].

pub mod document;
pub mod seed;

use thiserror::Error;

pub use document::DocumentStore;
pub use seed::default_store;

/// Errors from reading or writing the store document.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading, writing, or creating directories for the file failed.
    #[error("store file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not a valid store document.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The in-memory document could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
