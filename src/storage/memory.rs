use super::{KeyValueStorage, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory [`KeyValueStorage`].
///
/// Cloning shares the underlying map, so a test can hand one clone to the cart
/// and inspect what was written through another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
    fail_removals: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set_item`, `remove_item` and `clear` fail until
    /// switched off again. Reads keep working.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Makes only `remove_item` fail, leaving `set_item` and `clear` working.
    pub fn fail_removals(&self, fail: bool) {
        self.fail_removals.store(fail, Ordering::SeqCst);
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("writes disabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.check_writable()?;
        self.inner.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        if self.fail_removals.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("removals disabled".to_string()));
        }
        self.inner.lock().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.check_writable()?;
        self.inner.lock().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_contents() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set_item("k", "v".to_string()).await.unwrap();

        assert_eq!(other.get_item("k").await.unwrap().as_deref(), Some("v"));
        other.remove_item("k").await.unwrap();
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_fail_writes_rejects_mutations_but_not_reads() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v".to_string()).await.unwrap();
        storage.fail_writes(true);

        assert!(matches!(
            storage.set_item("k", "w".to_string()).await,
            Err(StorageError::Backend(_))
        ));
        assert!(storage.clear().await.is_err());
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("v"));

        storage.fail_writes(false);
        storage.clear().await.unwrap();
        assert_eq!(storage.len().await, 0);
    }

    #[tokio::test]
    async fn test_fail_removals_only_rejects_remove() {
        let storage = MemoryStorage::new();
        storage.fail_removals(true);

        storage.set_item("k", "v".to_string()).await.unwrap();
        assert!(storage.remove_item("k").await.is_err());
        assert_eq!(storage.len().await, 1);
    }
}
