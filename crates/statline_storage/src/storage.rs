//! Storage trait definition.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use statline_error::{JsonError, StatlineResult, StorageError, StorageErrorKind};

/// Trait for pluggable keyed table backends.
///
/// A backend stores opaque byte documents under a `(table, key)` pair.
/// Writes replace the whole document; readers never observe a partial write.
#[async_trait]
pub trait TableStorage: Send + Sync {
    /// Read the document stored under `(table, key)`.
    ///
    /// Returns `Ok(None)` when nothing has been written there.
    async fn read(&self, table: &str, key: &str) -> StatlineResult<Option<Vec<u8>>>;

    /// Replace the document stored under `(table, key)`.
    async fn write(&self, table: &str, key: &str, data: &[u8]) -> StatlineResult<()>;

    /// Check whether a document exists under `(table, key)`.
    async fn exists(&self, table: &str, key: &str) -> StatlineResult<bool>;
}

/// JSON helpers layered over any [`TableStorage`].
#[async_trait]
pub trait TableStorageExt: TableStorage {
    /// Read and decode a JSON document.
    async fn load_json<T>(&self, table: &str, key: &str) -> StatlineResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.read(table, key).await? {
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes).map_err(|e| {
                    JsonError::new(format!("decode {}/{}: {}", table, key, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Encode and write a JSON document.
    async fn save_json<T>(&self, table: &str, key: &str, value: &T) -> StatlineResult<()>
    where
        T: Serialize + Sync,
    {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| JsonError::new(format!("encode {}/{}: {}", table, key, e)))?;
        self.write(table, key, &bytes).await
    }
}

impl<S: TableStorage + ?Sized> TableStorageExt for S {}

/// Reject names that cannot safely become a single path component.
#[track_caller]
pub fn validate_component(name: &str) -> Result<(), StorageError> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::new(StorageErrorKind::InvalidKey(
            name.to_string(),
        )))
    }
}
