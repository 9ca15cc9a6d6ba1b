//! # Cart Errors
//!
//! Every operation on the cart returns `Result<_, CartError>`. Persistence
//! failures are surfaced here instead of being dropped on the floor.

use crate::storage::StorageError;

/// Errors returned by cart operations.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The handle outlived its provider: the cart actor is no longer running.
    #[error("use_cart must be used within a CartProvider")]
    OutsideProvider,
    #[error("Cart actor dropped response channel")]
    ActorDropped,
    /// The in-memory cart was updated but the write to storage failed.
    #[error("Cart persistence failed: {0}")]
    Persistence(#[from] StorageError),
    #[error("Stored cart under {key} is corrupted: {reason}")]
    Corrupted { key: String, reason: String },
}
