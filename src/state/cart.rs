//! Cart contents owned by the root application.
//!
//! DESIGN
//! ======
//! Items are snapshots taken at add-to-cart time and keep no link to the
//! variant they came from. The cart itself never touches the relay; the
//! drawer announces a removal only after the root cart has been written.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::state::product::VariantId;

/// Price/identity snapshot of a variant at add-to-cart time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product name.
    pub product: String,
    /// Variant id, echoed back on removal.
    pub variant: VariantId,
    pub color: String,
    pub price: f64,
}

/// Ordered cart sequence. Mutated only by append and positional removal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    pub fn push(&mut self, item: CartItem) {
        log::debug!("cart: add variant {} ({})", item.variant, item.color);
        self.items.push(item);
    }

    /// Remove the item at `position`, keeping the others in order.
    ///
    /// An out-of-range position removes nothing.
    pub fn remove(&mut self, position: usize) -> Option<CartItem> {
        if position >= self.items.len() {
            log::warn!("cart: remove at {position} out of range (len {})", self.items.len());
            return None;
        }
        let item = self.items.remove(position);
        log::debug!("cart: removed variant {} at {position}", item.variant);
        Some(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices, formatted to two decimals.
    pub fn total(&self) -> String {
        // Float `sum` starts from -0.0, which would print an empty cart as "-0.00".
        format_price(self.items.iter().fold(0.0, |acc, item| acc + item.price))
    }
}

pub fn format_price(amount: f64) -> String {
    format!("{amount:.2}")
}
