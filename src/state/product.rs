//! Product catalog, variant selection and stock bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The product display owns one `ProductState`: the variant list, which
//! variant is selected, and the reviews gathered from the relay. The cart only
//! ever sees `CartItem` snapshots, and stock flows back through
//! `cart-item-deleted` notifications handled by [`ProductState::apply`].
//!
//! Stock is deliberately lenient: `add_to_cart` decrements without a floor
//! (the disabled button is the only guard) and restocking an unknown variant
//! id changes nothing.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::{Deserialize, Serialize};

use crate::events::Notification;
use crate::state::cart::CartItem;
use crate::state::review::Review;

/// Catalog identifier of a variant.
pub type VariantId = u32;

/// Flat fee charged when the premium flag is off.
pub const STANDARD_SHIPPING_FEE: &str = "$0.99";

/// One purchasable color/price/stock combination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub price: f64,
    pub color: String,
    pub image: String,
    /// Units left. Signed because stock is not floored at zero.
    pub quantity: i32,
}

impl Variant {
    pub fn new(id: VariantId, price: f64, color: &str, image: &str, quantity: i32) -> Self {
        Self { id, price, color: color.to_owned(), image: image.to_owned(), quantity }
    }
}

/// Fixed descriptive fields plus the ordered variant list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub alt: String,
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
}

impl Product {
    /// The demo product shown by the storefront.
    pub fn converse() -> Self {
        Self {
            name: "Converse shoes".to_owned(),
            description: "A wide range of converse shoes available in multiple colours!".to_owned(),
            alt: "Green shoes".to_owned(),
            details: vec![
                "100% Real cotton canvas".to_owned(),
                "Leather styles also available".to_owned(),
                "Kids sizes available".to_owned(),
            ],
            variants: vec![
                Variant::new(2234, 29.99, "green", "./images/green shoe.jpg", 3),
                Variant::new(2235, 74.99, "blue", "./images/blue shoe.jpg", 12),
                Variant::new(2236, 49.99, "red", "./images/red shoes.jpg", 1),
                Variant::new(2237, 95.99, "brown", "./images/brown shoe.jpg", 8),
                Variant::new(2238, 29.99, "purple", "./images/purple shoe.jpg", 11),
            ],
        }
    }
}

/// State owned by the product display.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductState {
    pub product: Product,
    /// Index into `product.variants`. Only set from rendered variant controls.
    pub selected: usize,
    /// Reviews accumulated from `review-submitted`, rendered by the tabs panel.
    pub reviews: Vec<Review>,
}

impl Default for ProductState {
    fn default() -> Self {
        Self::new(Product::converse())
    }
}

impl ProductState {
    /// `product` must carry at least one variant; selection indexes into the list.
    pub fn new(product: Product) -> Self {
        debug_assert!(!product.variants.is_empty(), "a product needs at least one variant");
        Self { product, selected: 0, reviews: Vec::new() }
    }

    pub fn select_variant(&mut self, index: usize) {
        self.selected = index;
    }

    pub fn selected_variant(&self) -> &Variant {
        &self.product.variants[self.selected]
    }

    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    pub fn price(&self) -> f64 {
        self.selected_variant().price
    }

    pub fn quantity(&self) -> i32 {
        self.selected_variant().quantity
    }

    pub fn in_stock(&self) -> bool {
        in_stock(self.quantity())
    }

    pub fn status(&self) -> String {
        stock_status(self.quantity())
    }

    /// Snapshot the selected variant as a cart item, then take one unit of stock.
    ///
    /// The decrement is unconditional, so calling this at zero stock drives
    /// the quantity negative.
    pub fn add_to_cart(&mut self) -> CartItem {
        let item = {
            let variant = self.selected_variant();
            CartItem {
                product: self.product.name.clone(),
                variant: variant.id,
                color: variant.color.clone(),
                price: variant.price,
            }
        };
        self.product.variants[self.selected].quantity -= 1;
        item
    }

    /// Return one unit of stock to the variant with `id`.
    ///
    /// Returns `false` and leaves every variant untouched when `id` is unknown.
    pub fn restock(&mut self, id: VariantId) -> bool {
        match self.product.variants.iter_mut().find(|v| v.id == id) {
            Some(variant) => {
                variant.quantity += 1;
                true
            }
            None => {
                log::warn!("restock: no variant with id {id}, ignoring");
                false
            }
        }
    }

    pub fn record_review(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Fold a relay notification into this state.
    pub fn apply(&mut self, notification: &Notification) {
        match notification {
            Notification::ReviewSubmitted(review) => self.record_review(review.clone()),
            Notification::CartItemDeleted(id) => {
                self.restock(*id);
            }
        }
    }
}

pub fn in_stock(quantity: i32) -> bool {
    quantity > 0
}

/// Human-readable stock line for `quantity` units.
pub fn stock_status(quantity: i32) -> String {
    match quantity {
        q if q > 10 => "In stock".to_owned(),
        q if q > 1 => format!("Almost sold out, only {q} items are available!"),
        1 => "Hurry! Just 1 item is available!".to_owned(),
        _ => "Out of stock".to_owned(),
    }
}

pub fn shipping(premium: bool) -> &'static str {
    if premium { "Free" } else { STANDARD_SHIPPING_FEE }
}
