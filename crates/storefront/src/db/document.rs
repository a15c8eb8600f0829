//! File-backed document store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use super::{RepositoryError, seed};
use crate::models::Store;

/// Default location of the store file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "data/store.json";

/// Serialized access to the JSON store file.
///
/// All reads and writes of the file go through one `DocumentStore` and take
/// its lock, so concurrent requests never interleave partial I/O. Share it
/// behind an `Arc` (see [`crate::state::AppState`]); two instances pointing at
/// the same path do not exclude each other.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl DocumentStore {
    /// Create a store handle for the file at `path`. Does not touch the disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the seed document if, and only if, no file exists yet.
    ///
    /// Returns `true` when the seed was written.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be inspected or written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn ensure_initialized(&self) -> Result<bool, RepositoryError> {
        let _guard = self.lock.lock().await;

        match tokio::fs::metadata(&self.path).await {
            Ok(_) => Ok(false),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write_file(&seed::default_store()).await?;
                info!("Store file created with seed data");
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read and parse the whole document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be read (including
    /// when it does not exist) and `RepositoryError::DataCorruption` if it
    /// does not parse.
    pub async fn load(&self) -> Result<Store, RepositoryError> {
        let _guard = self.lock.lock().await;
        self.read_file().await
    }

    /// Serialize and overwrite the whole document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the directory or file cannot be written.
    pub async fn save(&self, store: &Store) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        self.write_file(store).await
    }

    /// Run a read-modify-write transaction under a single lock acquisition.
    ///
    /// Loads the document, applies `f`, and saves only if `f` returns `Ok`.
    /// Concurrent `update` calls are serialized, so no change is lost between
    /// one caller's load and its save.
    ///
    /// # Errors
    ///
    /// Returns the error from `f` unchanged (nothing is written), or a
    /// repository error converted into `E` if loading or saving fails.
    pub async fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Store) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let _guard = self.lock.lock().await;
        let mut store = self.read_file().await?;
        let value = f(&mut store)?;
        self.write_file(&store).await?;
        Ok(value)
    }

    // Callers hold `self.lock` around both file helpers.
    async fn read_file(&self) -> Result<Store, RepositoryError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let store = serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::DataCorruption(format!("{}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "Loaded store document");
        Ok(store)
    }

    // Overwrites in place; see the module docs on durability.
    async fn write_file(&self, store: &Store) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(store)?;
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&self.path, &bytes).await?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "Saved store document");
        Ok(())
    }
}
