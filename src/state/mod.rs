//! Storefront state modules.
//!
//! DESIGN
//! ======
//! State is split by owner (`store` for the root, `product` for the product
//! display, `review` for the form, `ui` for the tabs panel) so each component
//! depends on a small plain-data model. Derived values are pure functions
//! over these models, called from reactive closures in `components`.

pub mod cart;
pub mod product;
pub mod review;
pub mod store;
pub mod ui;
