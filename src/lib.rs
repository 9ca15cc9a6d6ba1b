//! # Marketplace Cart
//!
//! > **The shopping cart of a mobile storefront, as a Tokio actor.**
//!
//! The cart holds an ordered list of line items in memory, mirrors every change
//! to a key-value store, and rehydrates from that store on startup. Consumers
//! never touch global state: a [`CartProvider`](runtime::CartProvider) owns the
//! running cart and hands out [`CartClient`](framework::CartClient) handles,
//! which implement the [`CartStore`](framework::CartStore) trait consumers are
//! written against.
//!
//! ## Core Components
//!
//! - **[`model`]**: [`CartItem`](model::CartItem) and the pure list bookkeeping in [`CartState`](model::CartState).
//! - **[`storage`]**: the [`KeyValueStorage`](storage::KeyValueStorage) seam with memory and file backends.
//! - **[`framework`]**: the [`CartActor`](framework::CartActor), its messages, client and mocks.
//! - **[`runtime`]**: provider scope, configuration and tracing setup.
//!
//! ## Cart Semantics
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `add_to_cart(item)` | existing id: quantity + 1, other fields kept; new id: appended with quantity 1 |
//! | `increment(id)` | quantity + 1; unknown id is a no-op |
//! | `decrement(id)` | quantity already `<= 0`: line removed; otherwise quantity - 1; unknown id is a no-op |
//! | `products()` | current lines in insertion order |
//!
//! A line at quantity 1 decrements to 0 and stays visible; the *next* decrement
//! removes it.
//!
//! ## Persistence
//!
//! The whole collection is written as a JSON array under `@GoMarketplace:products`
//! after every change, and the call returns once the write finished. A failed
//! write comes back as [`CartError::Persistence`](framework::CartError::Persistence);
//! the in-memory change is kept.
//!
//! ## Quick Start
//!
//! ```rust
//! use marketplace_cart::model::CartItem;
//! use marketplace_cart::runtime::{CartConfig, CartProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = CartProvider::from_config(&CartConfig::default());
//!     let cart = provider.use_cart();
//!
//!     let mug = CartItem::new("p1", "Mug", "https://img/mug.png", 10.0, 0);
//!     cart.add_to_cart(mug.clone()).await.unwrap();
//!     cart.add_to_cart(mug).await.unwrap();
//!     cart.decrement("p1".into()).await.unwrap();
//!
//!     assert_eq!(cart.products().await.unwrap()[0].quantity, 1);
//!     provider.shutdown().await.unwrap();
//! }
//! ```

pub mod framework;
pub mod model;
pub mod runtime;
pub mod storage;
