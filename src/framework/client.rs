//! # Cart Client
//!
//! The handle consumers hold to talk to the running cart.

use crate::framework::error::CartError;
use crate::framework::message::{CartRequest, Response};
use crate::model::{CartItem, ProductId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// A cloneable handle to a running [`CartActor`](crate::framework::CartActor).
///
/// * **Cheap to clone** – holds only the request sender.
/// * **Scoped** – once the owning [`CartProvider`](crate::runtime::CartProvider)
///   shuts down, every call fails with [`CartError::OutsideProvider`].
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Adds one unit of `item`, appending it with quantity 1 if it is new.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn add_to_cart(&self, item: CartItem) -> Result<(), CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::AddToCart { item, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn increment(&self, id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Increment { id, respond_to })
            .await
    }

    /// Removes one unit, or the whole line if its quantity is already zero.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Decrement { id, respond_to })
            .await
    }

    /// Snapshot of the cart in display order.
    pub async fn products(&self) -> Result<Vec<CartItem>, CartError> {
        self.request(|respond_to| CartRequest::Products { respond_to })
            .await
    }

    pub async fn item(&self, id: ProductId) -> Result<Option<CartItem>, CartError> {
        self.request(|respond_to| CartRequest::Item { id, respond_to })
            .await
    }

    /// Re-reads the cart from storage. Returns the number of lines loaded.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<usize, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Reload { respond_to })
            .await
    }

    /// Asks the actor to stop. Every handle fails with
    /// [`CartError::OutsideProvider`] afterwards.
    pub(crate) async fn shutdown(&self) -> Result<(), CartError> {
        self.request(|respond_to| CartRequest::Shutdown { respond_to })
            .await
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(Response<R>) -> CartRequest,
    ) -> Result<R, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| CartError::OutsideProvider)?;
        response.await.map_err(|_| CartError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, next_request};
    use crate::storage::StorageError;

    #[tokio::test]
    async fn test_add_to_cart_sends_item() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            client
                .add_to_cart(CartItem::new("p1", "Mug", "u", 10.0, 0))
                .await
        });

        match next_request(&mut receiver).await {
            Some(CartRequest::AddToCart { item, respond_to }) => {
                assert_eq!(item.id, ProductId::from("p1"));
                respond_to.send(Ok(())).unwrap();
            }
            other => panic!("Expected AddToCart request, got {:?}", other),
        }

        assert!(add_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_persistence_error_reaches_caller() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.increment("p1".into()).await });

        match next_request(&mut receiver).await {
            Some(CartRequest::Increment { id, respond_to }) => {
                assert_eq!(id.0, "p1");
                respond_to
                    .send(Err(CartError::Persistence(StorageError::Backend(
                        "disk full".to_string(),
                    ))))
                    .unwrap();
            }
            other => panic!("Expected Increment request, got {:?}", other),
        }

        match task.await.unwrap() {
            Err(CartError::Persistence(e)) => assert!(e.to_string().contains("disk full")),
            other => panic!("Expected Persistence error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_closed_channel_means_outside_provider() {
        let (client, receiver) = create_mock_client(1);
        drop(receiver);

        let result = client.products().await;
        assert!(matches!(result, Err(CartError::OutsideProvider)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "use_cart must be used within a CartProvider"
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_means_actor_dropped() {
        let (client, mut receiver) = create_mock_client(1);

        let task = tokio::spawn(async move { client.decrement("p1".into()).await });
        drop(next_request(&mut receiver).await);

        assert!(matches!(task.await.unwrap(), Err(CartError::ActorDropped)));
    }
}
