use crate::framework::{CartActor, CartClient, Startup};
use crate::runtime::config::CartConfig;
use crate::storage::KeyValueStorage;
use std::sync::Arc;
use tracing::{error, info};

/// The provider scope for the cart.
///
/// `CartProvider` is responsible for:
/// - **Lifecycle Management**: spawning the [`CartActor`] and stopping it
/// - **Hydration**: the actor loads the stored cart before serving any request
/// - **Injection**: handing out [`CartClient`]s to consumers via [`use_cart`](Self::use_cart)
///
/// # Example
///
/// ```rust
/// use marketplace_cart::model::CartItem;
/// use marketplace_cart::runtime::{CartConfig, CartProvider};
///
/// #[tokio::main]
/// async fn main() {
///     let provider = CartProvider::from_config(&CartConfig::default());
///     let cart = provider.use_cart();
///
///     cart.add_to_cart(CartItem::new("p1", "Mug", "", 10.0, 0)).await.unwrap();
///
///     provider.shutdown().await.unwrap();
///     assert!(cart.products().await.is_err());
/// }
/// ```
pub struct CartProvider {
    client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CartProvider {
    /// Starts a cart over `storage`. Must be called inside a Tokio runtime.
    pub fn new(config: &CartConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        let (actor, client) = CartActor::new(config.buffer_size, storage, config.storage_keys());

        let startup = Startup {
            clear_on_start: config.clear_on_start,
        };
        let handle = tokio::spawn(actor.run(startup));

        Self { client, handle }
    }

    /// Starts a cart over the backend named in `config`.
    pub fn from_config(config: &CartConfig) -> Self {
        Self::new(config, config.open_storage())
    }

    /// Returns a handle to the cart for a consumer.
    pub fn use_cart(&self) -> CartClient {
        self.client.clone()
    }

    /// Stops the cart.
    ///
    /// Handles still held by consumers stay valid as values but every call on
    /// them fails with [`CartError::OutsideProvider`](crate::framework::CartError::OutsideProvider).
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor stopped cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart...");

        // Already stopped if the actor panicked; the join below reports it.
        let _ = self.client.shutdown().await;
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Cart shutdown complete.");
        Ok(())
    }
}
