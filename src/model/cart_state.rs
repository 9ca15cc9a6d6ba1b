//! The in-memory cart: an ordered list of [`CartItem`]s keyed by product id.
//!
//! `CartState` is plain bookkeeping with no I/O. The [`CartActor`](crate::framework::CartActor)
//! applies these operations and then mirrors the result to storage.

use super::cart_item::{CartItem, ProductId};

/// What a mutation did to the collection.
///
/// The actor uses this to decide which storage writes to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    Added,
    /// An existing line's quantity changed.
    QuantityChanged,
    /// The line was removed from the cart.
    Removed,
    /// The id was not in the cart; nothing changed.
    Unchanged,
}

/// Ordered cart contents. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from a stored list, keeping the first record for any
    /// duplicated id.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut state = Self::new();
        for item in items {
            if state.position(&item.id).is_none() {
                state.items.push(item);
            }
        }
        state
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `item`.
    ///
    /// An existing line keeps its own title, image and price; only its quantity
    /// moves. A new line is appended with the incoming fields and quantity 1.
    pub fn add(&mut self, item: CartItem) -> CartChange {
        match self.position(&item.id) {
            Some(index) => {
                self.items[index].quantity = self.items[index].quantity.saturating_add(1);
                CartChange::QuantityChanged
            }
            None => {
                self.items.push(CartItem {
                    quantity: 1,
                    ..item
                });
                CartChange::Added
            }
        }
    }

    pub fn increment(&mut self, id: &ProductId) -> CartChange {
        match self.position(id) {
            Some(index) => {
                self.items[index].quantity = self.items[index].quantity.saturating_add(1);
                CartChange::QuantityChanged
            }
            None => CartChange::Unchanged,
        }
    }

    /// Removes one unit of `id`.
    ///
    /// The removal check runs against the quantity *before* this call: a line at
    /// 1 drops to 0 and stays in the cart, and only a further decrement removes it.
    pub fn decrement(&mut self, id: &ProductId) -> CartChange {
        let Some(index) = self.position(id) else {
            return CartChange::Unchanged;
        };

        if self.items[index].quantity <= 0 {
            self.items.remove(index);
            CartChange::Removed
        } else {
            self.items[index].quantity -= 1;
            CartChange::QuantityChanged
        }
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}
