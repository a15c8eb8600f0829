//! CLI subcommand implementations.

pub mod admin;
pub mod init;
pub mod products;

use partshop_storefront::db::RepositoryError;
use partshop_storefront::error::AppError;
use thiserror::Error;

/// Errors a subcommand can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The store operation was rejected or failed.
    #[error(transparent)]
    App(#[from] AppError),

    /// The store document could not be read or written.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
