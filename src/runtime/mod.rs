//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure around the cart actor:
//!
//! - [`CartProvider`] - spawns and stops the cart, hands out clients
//! - [`CartConfig`] - TOML configuration
//! - [`setup_tracing`] - initializes logging

pub mod config;
pub mod provider;
pub mod tracing;

pub use config::*;
pub use provider::*;
pub use self::tracing::setup_tracing;
