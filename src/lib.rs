//! # storefront
//!
//! Leptos + WASM storefront demo: a product detail view with color variants,
//! stock and shipping status, a tabbed reviews panel with a review form, and a
//! cart drawer.
//!
//! All storefront state lives in the browser tab. Sibling components
//! exchange `review-submitted` and `cart-item-deleted` notifications through
//! the [`events::EventBus`] relay that the root application provides.

pub mod app;
pub mod components;
pub mod events;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
