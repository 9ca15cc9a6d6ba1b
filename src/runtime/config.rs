//! # Configuration
//!
//! [`CartConfig`] is read from a TOML file. Every field has a default, so an
//! empty file (or no file at all) yields a working in-memory cart.
//!
//! ```toml
//! storage_key = "@GoMarketplace:products"
//! clear_on_start = false
//! buffer_size = 32
//!
//! [storage]
//! backend = "file"
//! path = "/var/lib/marketplace/storage.json"
//! ```

use crate::framework::{StorageKeys, LEGACY_STORAGE_KEY, STORAGE_KEY};
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Storage backend selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    #[default]
    Memory,
    File {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key the cart collection is written under.
    pub storage_key: String,
    /// Key an older build used for the same collection.
    pub legacy_storage_key: String,
    /// Read `legacy_storage_key` when `storage_key` is absent and move it over.
    pub migrate_legacy_key: bool,
    /// Wipe all storage before hydrating (legacy startup behavior).
    pub clear_on_start: bool,
    /// Request channel capacity.
    pub buffer_size: usize,
    pub storage: StorageConfig,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            legacy_storage_key: LEGACY_STORAGE_KEY.to_string(),
            migrate_legacy_key: true,
            clear_on_start: false,
            buffer_size: 32,
            storage: StorageConfig::default(),
        }
    }
}

impl CartConfig {
    /// Loads the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            canonical: self.storage_key.clone(),
            legacy: self
                .migrate_legacy_key
                .then(|| self.legacy_storage_key.clone()),
        }
    }

    /// Builds the configured storage backend.
    pub fn open_storage(&self) -> Arc<dyn KeyValueStorage> {
        match &self.storage {
            StorageConfig::Memory => Arc::new(MemoryStorage::new()),
            StorageConfig::File { path } => Arc::new(FileStorage::new(path)),
        }
    }
}

/// Default location of the file backend: `<data dir>/marketplace-cart/storage.json`.
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("marketplace-cart").join("storage.json"))
}
