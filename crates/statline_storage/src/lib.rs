//! Keyed table persistence for Statline.
//!
//! The player-id index and the stat record store each own a *table* (a
//! namespace) inside a shared backend. Every entry is a whole JSON document
//! that is replaced atomically; there are no partial-field updates.
//!
//! # Example
//!
//! ```rust
//! use statline_storage::{MemoryStorage, TableStorage, TableStorageExt};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = MemoryStorage::new();
//! storage.save_json("player_ids", "2016-17", &vec!["Kevin Durant"]).await?;
//!
//! let names: Option<Vec<String>> = storage.load_json("player_ids", "2016-17").await?;
//! assert_eq!(names.unwrap(), vec!["Kevin Durant".to_string()]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod filesystem;
mod memory;
mod storage;

pub use filesystem::FileSystemStorage;
pub use memory::MemoryStorage;
pub use statline_error::{StorageError, StorageErrorKind};
pub use storage::{TableStorage, TableStorageExt, validate_component};
