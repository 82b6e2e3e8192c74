//! Root application state: cart, cart visibility and the premium flag.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::state::cart::{CartItem, CartState};

/// Premium shipping is on for the demo session.
pub const DEFAULT_PREMIUM: bool = true;

/// Global state held by the root application.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreState {
    /// Session configuration; no UI changes it.
    pub premium: bool,
    pub cart_open: bool,
    pub cart: CartState,
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(DEFAULT_PREMIUM)
    }
}

impl StoreState {
    pub fn new(premium: bool) -> Self {
        Self { premium, cart_open: false, cart: CartState::default() }
    }

    /// Append `item`. No dedup, no capacity limit.
    pub fn add_to_cart(&mut self, item: CartItem) {
        self.cart.push(item);
    }

    /// Drop the cart row at `position`; see [`CartState::remove`].
    pub fn remove_cart_item(&mut self, position: usize) -> Option<CartItem> {
        self.cart.remove(position)
    }

    pub fn toggle_cart_visibility(&mut self) {
        self.cart_open = !self.cart_open;
    }

    pub fn hide_cart(&mut self) {
        self.cart_open = false;
    }

    /// Label of the header cart button.
    pub fn cart_label(&self) -> String {
        format!("Cart ({})", self.cart.len())
    }
}
