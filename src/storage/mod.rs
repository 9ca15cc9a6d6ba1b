//! # Persistent Key-Value Storage
//!
//! The cart mirrors every mutation to an asynchronous key-value store, the way a
//! mobile app writes to device storage. The store itself is an external
//! collaborator; this module defines the seam ([`KeyValueStorage`]) and ships two
//! backends:
//!
//! - [`MemoryStorage`] - process-local map, used by tests and the default config
//! - [`FileStorage`] - a JSON document on disk that survives restarts
//!
//! Values are opaque strings. The cart stores its collection as a JSON array
//! (see [`CartItem`](crate::model::CartItem)).

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Asynchronous string key-value storage.
///
/// Mirrors the four calls the storefront makes against device storage. All
/// methods are fallible; the cart surfaces failures to its callers.
#[async_trait]
pub trait KeyValueStorage: Send + Sync + 'static {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Deletes `key`. Deleting an absent key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Deletes every key.
    async fn clear(&self) -> Result<(), StorageError>;
}
