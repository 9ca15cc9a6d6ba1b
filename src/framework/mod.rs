//! The cart runtime: actor, messages, client handle and the injected store trait.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::{CartActor, Startup, StorageKeys, LEGACY_STORAGE_KEY, STORAGE_KEY};
pub use client::CartClient;
pub use error::CartError;
pub use message::{CartRequest, Response};
pub use store::CartStore;
