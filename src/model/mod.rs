//! Pure data structures for the cart: line items and the ordered collection.

pub mod cart_item;
pub mod cart_state;

pub use cart_item::*;
pub use cart_state::*;
