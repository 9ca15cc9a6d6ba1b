//! # CartStore Trait
//!
//! The capability consumers depend on. UI-side code takes an `impl CartStore`
//! (or `&dyn CartStore`) instead of reaching for a global, so the running cart
//! is injected from the [`CartProvider`](crate::runtime::CartProvider) and tests
//! can substitute a [`MockCartClient`](crate::framework::mock::MockCartClient).
//!
//! # Example
//!
//! ```rust
//! use marketplace_cart::framework::{CartError, CartStore};
//! use marketplace_cart::model::{CartItem, ProductId};
//!
//! // A consumer written against the trait, not a concrete client.
//! async fn buy_two(store: &impl CartStore, item: CartItem) -> Result<i64, CartError> {
//!     let id = item.id.clone();
//!     store.add_to_cart(item).await?;
//!     store.increment(id.clone()).await?;
//!     Ok(store.quantity_of(&id).await?.unwrap_or(0))
//! }
//! ```
use crate::framework::client::CartClient;
use crate::framework::error::CartError;
use crate::model::{CartItem, ProductId};
use async_trait::async_trait;

#[async_trait]
pub trait CartStore: Send + Sync {
    async fn add_to_cart(&self, item: CartItem) -> Result<(), CartError>;

    async fn increment(&self, id: ProductId) -> Result<(), CartError>;

    async fn decrement(&self, id: ProductId) -> Result<(), CartError>;

    /// Current cart contents in display order.
    async fn products(&self) -> Result<Vec<CartItem>, CartError>;

    /// Quantity of one line, or `None` if it is not in the cart.
    async fn quantity_of(&self, id: &ProductId) -> Result<Option<i64>, CartError> {
        Ok(self
            .products()
            .await?
            .into_iter()
            .find(|item| &item.id == id)
            .map(|item| item.quantity))
    }

    /// Total units across all lines, as shown on a cart badge.
    async fn total_units(&self) -> Result<i64, CartError> {
        Ok(self.products().await?.iter().map(|item| item.quantity).sum())
    }
}

#[async_trait]
impl CartStore for CartClient {
    async fn add_to_cart(&self, item: CartItem) -> Result<(), CartError> {
        CartClient::add_to_cart(self, item).await
    }

    async fn increment(&self, id: ProductId) -> Result<(), CartError> {
        CartClient::increment(self, id).await
    }

    async fn decrement(&self, id: ProductId) -> Result<(), CartError> {
        CartClient::decrement(self, id).await
    }

    async fn products(&self) -> Result<Vec<CartItem>, CartError> {
        CartClient::products(self).await
    }

    async fn quantity_of(&self, id: &ProductId) -> Result<Option<i64>, CartError> {
        Ok(self.item(id.clone()).await?.map(|item| item.quantity))
    }
}
