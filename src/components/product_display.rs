//! Product detail view: image, variants, price, stock and shipping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `ProductState` signal. Add-to-cart snapshots are handed to the
//! root through `on_add_to_cart`; restocks and reviews arrive over the relay
//! and are folded in with `ProductState::apply`. The review list is passed
//! down to `ProductTabs`, which only renders it.

#[cfg(test)]
#[path = "product_display_test.rs"]
mod product_display_test;

use leptos::prelude::*;

use crate::components::product_tabs::ProductTabs;
use crate::events::{EventBus, Topic};
use crate::state::cart::CartItem;
use crate::state::product::{ProductState, shipping};

/// Product detail panel.
#[component]
pub fn ProductDisplay(#[prop(into)] premium: Signal<bool>, on_add_to_cart: Callback<CartItem>) -> impl IntoView {
    let bus = expect_context::<EventBus>();
    let product = RwSignal::new(ProductState::default());

    let subscriptions = [Topic::ReviewSubmitted, Topic::CartItemDeleted]
        .map(|topic| bus.subscribe(topic, move |n| product.update(|p| p.apply(n))));
    on_cleanup(move || {
        for id in subscriptions {
            bus.unsubscribe(id);
        }
    });

    let catalog = product.with_untracked(|p| p.product.clone());
    let name = catalog.name;
    let description = catalog.description;
    let alt = catalog.alt;
    let details = catalog.details;
    let variants = catalog.variants;

    let image = move || product.with(|p| p.image().to_owned());
    let price = move || product.with(ProductState::price);
    let status = move || product.with(ProductState::status);
    let in_stock = move || product.with(ProductState::in_stock);
    let shipping_fee = move || shipping(premium.get());
    let reviews = Signal::derive(move || product.with(|p| p.reviews.clone()));

    let on_add = move |_| {
        if let Some(item) = product.try_update(ProductState::add_to_cart) {
            on_add_to_cart.run(item);
        }
    };

    view! {
        <div class="product">
            <div class="product-image">
                <img src=image alt=alt />
            </div>

            <div class="product-info">
                <h1 class="product-title">{name}</h1>
                <h2>{description}</h2>

                <h3>"Details"</h3>
                <ul>
                    {details.into_iter().map(|detail| view! { <li>{detail}</li> }).collect_view()}
                </ul>

                <h3>"Variants"</h3>
                <ul class="variants">
                    {variants
                        .into_iter()
                        .enumerate()
                        .map(|(index, variant)| {
                            view! {
                                <li
                                    class="color-box"
                                    class:color-box--selected=move || product.with(|p| p.selected == index)
                                    style:background-color=variant.color.clone()
                                    on:click=move |_| product.update(|p| p.select_variant(index))
                                >
                                    {variant.color.clone()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <p>{move || price_label(price())}</p>

                <p>{status}</p>

                <button
                    class="button"
                    class:button--disabled=move || !in_stock()
                    disabled=move || !in_stock()
                    on:click=on_add
                >
                    "Add to cart"
                </button>

                <p><small>{move || shipping_label(shipping_fee())}</small></p>
            </div>

            <ProductTabs reviews=reviews />
        </div>
    }
}

fn price_label(price: f64) -> String {
    format!("Price: $ {price}")
}

fn shipping_label(fee: &str) -> String {
    format!("(Shipping fee: {fee})")
}
