//! # Mock Cart & Testing Guide
//!
//! `MockCartClient` hands out a real [`CartClient`] whose requests are answered
//! from a queue of expectations instead of by a [`CartActor`](crate::framework::CartActor).
//! Use it to test code written against [`CartStore`](crate::framework::CartStore)
//! without storage and without hydration.
//!
//! ## When to use Mocks vs the Real Cart
//!
//! | Feature | MockCartClient | CartProvider |
//! |---------|----------------|--------------|
//! | **State** | None (expectations) | Real cart + storage |
//! | **Use Case** | Logic *around* the cart | The cart itself, end to end |
//! | **Error Injection** | `return_err` | `MemoryStorage::fail_writes`, `fail_removals` |
//!
//! ## Example
//!
//! ```rust
//! use marketplace_cart::framework::mock::MockCartClient;
//! use marketplace_cart::framework::{CartError, CartStore};
//! use marketplace_cart::model::CartItem;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCartClient::new();
//!     mock.expect_products()
//!         .return_ok(vec![CartItem::new("p1", "Mug", "", 10.0, 3)]);
//!     mock.expect_increment("p1".into())
//!         .return_err(CartError::OutsideProvider);
//!
//!     let store = mock.client();
//!     assert_eq!(store.total_units().await.unwrap(), 3);
//!     assert!(store.increment("p1".into()).await.is_err());
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Low-level Helpers
//!
//! [`create_mock_client`] returns a client plus the raw request receiver, for
//! tests that want to inspect each [`CartRequest`] and answer it by hand.

use crate::framework::client::CartClient;
use crate::framework::error::CartError;
use crate::framework::message::CartRequest;
use crate::model::{CartItem, ProductId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to answer it with.
enum Expectation {
    AddToCart {
        response: Result<(), CartError>,
    },
    Increment {
        id: ProductId,
        response: Result<(), CartError>,
    },
    Decrement {
        id: ProductId,
        response: Result<(), CartError>,
    },
    Products {
        response: Result<Vec<CartItem>, CartError>,
    },
    Item {
        id: ProductId,
        response: Result<Option<CartItem>, CartError>,
    },
    Reload {
        response: Result<usize, CartError>,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock cart with expectation tracking for fluent testing.
pub struct MockCartClient {
    client: CartClient,
    expectations: Expectations,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockCartClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCartClient {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CartRequest>(100);
        let expectations: Expectations = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CartRequest::AddToCart { respond_to, .. },
                        Some(Expectation::AddToCart { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CartRequest::Increment { id, respond_to },
                        Some(Expectation::Increment { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "increment called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        CartRequest::Decrement { id, respond_to },
                        Some(Expectation::Decrement { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "decrement called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        CartRequest::Products { respond_to },
                        Some(Expectation::Products { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CartRequest::Item { id, respond_to },
                        Some(Expectation::Item { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "item called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        CartRequest::Reload { respond_to },
                        Some(Expectation::Reload { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: CartClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CartClient {
        self.client.clone()
    }

    pub fn expect_add_to_cart(&mut self) -> ExpectationBuilder<()> {
        self.builder(|response| Expectation::AddToCart { response })
    }

    pub fn expect_increment(&mut self, id: ProductId) -> ExpectationBuilder<()> {
        self.builder(move |response| Expectation::Increment { id, response })
    }

    pub fn expect_decrement(&mut self, id: ProductId) -> ExpectationBuilder<()> {
        self.builder(move |response| Expectation::Decrement { id, response })
    }

    pub fn expect_products(&mut self) -> ExpectationBuilder<Vec<CartItem>> {
        self.builder(|response| Expectation::Products { response })
    }

    /// Also answers [`CartStore::quantity_of`](crate::framework::CartStore::quantity_of).
    pub fn expect_item(&mut self, id: ProductId) -> ExpectationBuilder<Option<CartItem>> {
        self.builder(move |response| Expectation::Item { id, response })
    }

    pub fn expect_reload(&mut self) -> ExpectationBuilder<usize> {
        self.builder(|response| Expectation::Reload { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, CartError>) -> Expectation + Send + 'static,
    ) -> ExpectationBuilder<R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<R> {
    make: Box<dyn FnOnce(Result<R, CartError>) -> Expectation + Send>,
    expectations: Expectations,
}

impl<R> ExpectationBuilder<R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CartError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, CartError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Waits for the next request sent by a client from [`create_mock_client`].
pub async fn next_request(receiver: &mut mpsc::Receiver<CartRequest>) -> Option<CartRequest> {
    receiver.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::CartStore;

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockCartClient::new();
        mock.expect_add_to_cart().return_ok(());
        mock.expect_decrement("p1".into()).return_ok(());
        mock.expect_products()
            .return_ok(vec![CartItem::new("p1", "Mug", "", 10.0, 0)]);

        let client = mock.client();
        client
            .add_to_cart(CartItem::new("p1", "Mug", "", 10.0, 0))
            .await
            .unwrap();
        client.decrement("p1".into()).await.unwrap();
        assert_eq!(client.total_units().await.unwrap(), 0);

        mock.verify();
    }

    #[tokio::test]
    async fn test_item_and_reload_expectations() {
        let mut mock = MockCartClient::new();
        mock.expect_reload().return_ok(1);
        mock.expect_item("p1".into())
            .return_ok(Some(CartItem::new("p1", "Mug", "", 10.0, 4)));

        let client = mock.client();
        assert_eq!(client.reload().await.unwrap(), 1);
        assert_eq!(client.item("p1".into()).await.unwrap().unwrap().quantity, 4);

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockCartClient::new();
        mock.expect_products().return_ok(Vec::new());
        mock.verify();
    }
}
