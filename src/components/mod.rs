//! Storefront UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render plain state models from `state` and talk to each other
//! through props, callbacks, and the `EventBus` relay provided by the root.

pub mod cart_drawer;
pub mod product_display;
pub mod product_tabs;
pub mod review_form;
