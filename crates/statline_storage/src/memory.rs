//! In-process table storage.

use crate::{TableStorage, validate_component};
use async_trait::async_trait;
use statline_error::StatlineResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Tables = HashMap<(String, String), Vec<u8>>;

/// Table storage held in memory.
///
/// Clones share the same tables. Useful for tests and one-shot runs that
/// should not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents across all tables.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl TableStorage for MemoryStorage {
    async fn read(&self, table: &str, key: &str) -> StatlineResult<Option<Vec<u8>>> {
        validate_component(table)?;
        validate_component(key)?;
        Ok(self.lock().get(&(table.to_string(), key.to_string())).cloned())
    }

    async fn write(&self, table: &str, key: &str, data: &[u8]) -> StatlineResult<()> {
        validate_component(table)?;
        validate_component(key)?;
        self.lock()
            .insert((table.to_string(), key.to_string()), data.to_vec());
        Ok(())
    }

    async fn exists(&self, table: &str, key: &str) -> StatlineResult<bool> {
        validate_component(table)?;
        validate_component(key)?;
        Ok(self
            .lock()
            .contains_key(&(table.to_string(), key.to_string())))
    }
}
