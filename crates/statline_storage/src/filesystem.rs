//! Filesystem-based table storage.
//!
//! Each document lives at `{base_path}/{table}/{key}.json`.

use crate::{TableStorage, validate_component};
use async_trait::async_trait;
use statline_error::{StatlineResult, StorageError, StorageErrorKind};
use std::path::PathBuf;

/// Filesystem storage backend.
///
/// # Example Structure
///
/// ```text
/// ~/.local/share/statline/
/// ├── player_ids/
/// │   ├── 2016-17.json
/// │   └── 2017-18.json
/// └── player_stats/
///     ├── 1718_PerGame.json
///     └── 708_Per36.json
/// ```
///
/// Writes go to a temp file that is then renamed over the target, so an
/// entry is always either the old document or the new one.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StatlineResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened filesystem table storage");
        Ok(Self { base_path })
    }

    fn entry_path(&self, table: &str, key: &str) -> Result<PathBuf, StorageError> {
        validate_component(table)?;
        validate_component(key)?;
        Ok(self.base_path.join(table).join(format!("{}.json", key)))
    }
}

#[async_trait]
impl TableStorage for FileSystemStorage {
    #[tracing::instrument(skip(self))]
    async fn read(&self, table: &str, key: &str) -> StatlineResult<Option<Vec<u8>>> {
        let path = self.entry_path(table, key)?;

        match tokio::fs::read(&path).await {
            Ok(data) => {
                tracing::debug!(path = %path.display(), size = data.len(), "Read table entry");
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn write(&self, table: &str, key: &str, data: &[u8]) -> StatlineResult<()> {
        let path = self.entry_path(table, key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), size = data.len(), "Wrote table entry");
        Ok(())
    }

    async fn exists(&self, table: &str, key: &str) -> StatlineResult<bool> {
        let path = self.entry_path(table, key)?;
        Ok(tokio::fs::try_exists(&path).await.unwrap_or(false))
    }
}
