//! # Cart Messages
//!
//! Requests sent from a [`CartClient`](crate::framework::CartClient) to the
//! [`CartActor`](crate::framework::CartActor). Each carries a oneshot sender the
//! actor answers on once the in-memory update and its storage write are done.

use crate::framework::error::CartError;
use crate::model::{CartItem, ProductId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, CartError>>;

#[derive(Debug)]
pub enum CartRequest {
    AddToCart {
        item: CartItem,
        respond_to: Response<()>,
    },
    Increment {
        id: ProductId,
        respond_to: Response<()>,
    },
    Decrement {
        id: ProductId,
        respond_to: Response<()>,
    },
    Products {
        respond_to: Response<Vec<CartItem>>,
    },
    Item {
        id: ProductId,
        respond_to: Response<Option<CartItem>>,
    },
    /// Re-read the cart from storage, replacing the in-memory copy.
    Reload { respond_to: Response<usize> },
    /// Stop the actor. Requests still queued behind it are dropped.
    Shutdown { respond_to: Response<()> },
}
