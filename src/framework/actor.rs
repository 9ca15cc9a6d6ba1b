//! # Cart Actor
//!
//! This module defines the `CartActor`, the task that owns the cart. It
//! processes requests sequentially, so the in-memory collection and the writes
//! that mirror it are always applied in the order requests arrive.

use crate::framework::client::CartClient;
use crate::framework::error::CartError;
use crate::framework::message::CartRequest;
use crate::model::{CartChange, CartItem, CartState, ProductId};
use crate::storage::{KeyValueStorage, StorageError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Key under which the cart collection is stored.
pub const STORAGE_KEY: &str = "@GoMarketplace:products";

/// Key an older build wrote increment/decrement results to. Only read, as a
/// migration source, when [`STORAGE_KEY`] is absent.
pub const LEGACY_STORAGE_KEY: &str = "@gostackmarketplace:products";

/// Where the actor reads and writes the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub canonical: String,
    pub legacy: Option<String>,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            canonical: STORAGE_KEY.to_string(),
            legacy: Some(LEGACY_STORAGE_KEY.to_string()),
        }
    }
}

/// Startup behavior injected into [`CartActor::run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Startup {
    /// Wipe all storage before hydrating. This discards the previous session's
    /// cart and exists only to reproduce the legacy storefront startup.
    pub clear_on_start: bool,
}

/// The actor that owns the cart state and its storage.
///
/// **Concurrency Model**:
/// One task, one receiver. Requests are handled to completion one at a time,
/// including the storage write, so no lock guards the state and two mutations
/// never compose their writes from a stale snapshot.
///
/// # Usage Pattern
///
/// ```rust
/// use marketplace_cart::framework::{CartActor, Startup, StorageKeys};
/// use marketplace_cart::model::CartItem;
/// use marketplace_cart::storage::MemoryStorage;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let storage = Arc::new(MemoryStorage::new());
///     let (actor, client) = CartActor::new(8, storage, StorageKeys::default());
///     tokio::spawn(actor.run(Startup::default()));
///
///     client.add_to_cart(CartItem::new("p1", "Mug", "", 10.0, 0)).await.unwrap();
///     assert_eq!(client.products().await.unwrap()[0].quantity, 1);
/// }
/// ```
///
/// # Operations
///
/// * **AddToCart / Increment / Decrement**:
///     1. Apply the change to [`CartState`].
///     2. If something changed, write the whole collection under the canonical key.
///     3. When a decrement removed the line, also delete the line's own key
///        (unless the product id is one of the collection keys).
///     4. Reply; a failed write is returned as [`CartError::Persistence`] while
///        the in-memory change stands.
///
/// * **Products / Item**: reply with clones of the current state.
///
/// * **Reload**: replace the in-memory state with what storage holds.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    state: CartState,
    storage: Arc<dyn KeyValueStorage>,
    keys: StorageKeys,
}

impl CartActor {
    /// Creates a new `CartActor` and its associated [`CartClient`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When full, client
    ///   calls wait for space.
    /// * `storage` - Backend the cart is mirrored to
    /// * `keys` - Canonical and legacy keys for the collection
    pub fn new(
        buffer_size: usize,
        storage: Arc<dyn KeyValueStorage>,
        keys: StorageKeys,
    ) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: CartState::new(),
            storage,
            keys,
        };
        (actor, CartClient::new(sender))
    }

    /// Hydrates from storage, then processes requests until a `Shutdown` request
    /// arrives or every client is dropped.
    ///
    /// Requests sent before hydration finishes wait in the channel, so no caller
    /// ever observes the empty pre-load cart.
    pub async fn run(mut self, startup: Startup) {
        info!(key = %self.keys.canonical, "Cart actor started");
        self.hydrate(startup).await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddToCart { item, respond_to } => {
                    debug!(?item, "AddToCart");
                    let id = item.id.clone();
                    let change = self.state.add(item);
                    let _ = respond_to.send(self.commit(&id, change).await);
                }
                CartRequest::Increment { id, respond_to } => {
                    debug!(%id, "Increment");
                    let change = self.state.increment(&id);
                    let _ = respond_to.send(self.commit(&id, change).await);
                }
                CartRequest::Decrement { id, respond_to } => {
                    debug!(%id, "Decrement");
                    let change = self.state.decrement(&id);
                    let _ = respond_to.send(self.commit(&id, change).await);
                }
                CartRequest::Products { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.items().to_vec()));
                }
                CartRequest::Item { id, respond_to } => {
                    let item = self.state.get(&id).cloned();
                    debug!(%id, found = item.is_some(), "Item");
                    let _ = respond_to.send(Ok(item));
                }
                CartRequest::Reload { respond_to } => {
                    let result = self.load().await.map(|state| {
                        self.state = state;
                        self.state.len()
                    });
                    match &result {
                        Ok(size) => info!(size, "Reloaded"),
                        Err(e) => warn!(error = %e, "Reload failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::Shutdown { respond_to } => {
                    let _ = respond_to.send(Ok(()));
                    break;
                }
            }
        }

        info!(size = self.state.len(), "Cart actor shutdown");
    }

    async fn hydrate(&mut self, startup: Startup) {
        if startup.clear_on_start {
            warn!("Clearing all storage before hydrating; the previous cart is discarded");
            if let Err(e) = self.storage.clear().await {
                warn!(error = %e, "Clear on start failed");
            }
        }

        match self.load().await {
            Ok(state) => {
                self.state = state;
                info!(size = self.state.len(), "Hydrated");
            }
            Err(e) => warn!(error = %e, "Hydration failed, starting with an empty cart"),
        }
    }

    /// Reads the collection from the canonical key, migrating it from the
    /// legacy key when only that one exists.
    async fn load(&self) -> Result<CartState, CartError> {
        if let Some(raw) = self.storage.get_item(&self.keys.canonical).await? {
            return parse(&self.keys.canonical, &raw);
        }

        let Some(legacy) = &self.keys.legacy else {
            return Ok(CartState::new());
        };
        let Some(raw) = self.storage.get_item(legacy).await? else {
            return Ok(CartState::new());
        };

        let state = parse(legacy, &raw)?;
        self.storage.set_item(&self.keys.canonical, raw).await?;
        // Canonical key is authoritative from here on.
        if let Err(e) = self.storage.remove_item(legacy).await {
            warn!(key = %legacy, error = %e, "Failed to remove legacy cart key");
        }
        info!(from = %legacy, to = %self.keys.canonical, size = state.len(), "Migrated legacy cart");
        Ok(state)
    }

    async fn commit(&self, id: &ProductId, change: CartChange) -> Result<(), CartError> {
        match change {
            CartChange::Unchanged => {
                debug!(%id, "Not in cart");
                Ok(())
            }
            CartChange::Added | CartChange::QuantityChanged => self.persist().await,
            CartChange::Removed => {
                self.persist().await?;
                if self.is_cart_key(&id.0) {
                    warn!(%id, "Product id collides with a cart key, keeping it");
                } else {
                    self.storage.remove_item(&id.0).await?;
                }
                info!(%id, size = self.state.len(), "Removed");
                Ok(())
            }
        }
    }

    /// Product ids share the storage namespace with the collection keys.
    fn is_cart_key(&self, key: &str) -> bool {
        key == self.keys.canonical || self.keys.legacy.as_deref() == Some(key)
    }

    async fn persist(&self) -> Result<(), CartError> {
        let raw = serde_json::to_string(self.state.items()).map_err(StorageError::from)?;
        if let Err(e) = self.storage.set_item(&self.keys.canonical, raw).await {
            warn!(error = %e, size = self.state.len(), "Persist failed");
            return Err(e.into());
        }
        debug!(size = self.state.len(), "Persisted");
        Ok(())
    }
}

fn parse(key: &str, raw: &str) -> Result<CartState, CartError> {
    serde_json::from_str::<Vec<CartItem>>(raw)
        .map(CartState::from_items)
        .map_err(|e| CartError::Corrupted {
            key: key.to_string(),
            reason: e.to_string(),
        })
}
