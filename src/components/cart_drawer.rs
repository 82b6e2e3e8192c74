//! Cart drawer listing root-held cart items with totals and removal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and mutates the root `StoreState` from context. Removing a row
//! writes the root cart first and only then publishes `cart-item-deleted`,
//! so the product display restocks against an already-updated cart. Closing
//! writes the root visibility flag.

#[cfg(test)]
#[path = "cart_drawer_test.rs"]
mod cart_drawer_test;

use leptos::prelude::*;

use crate::events::{EventBus, Notification};
use crate::state::cart::CartItem;
use crate::state::store::StoreState;

/// Slide-over cart panel.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();
    let bus = StoredValue::new(expect_context::<EventBus>());

    let visible = move || store.with(|s| s.cart_open);
    let has_items = move || store.with(|s| !s.cart.is_empty());
    let total = move || store.with(|s| s.cart.total());

    let remove = move |position: usize| {
        bus.with_value(|bus| remove_row(store, bus, position));
    };

    view! {
        <div class="cart-content" style:display=move || if visible() { "block" } else { "none" }>
            <button class="cart-content__close" on:click=move |_| store.update(StoreState::hide_cart)>
                "Close"
            </button>

            <h2 class="cart-content__title">"Your cart"</h2>

            <Show when=has_items fallback=|| view! { <p>"Your cart is empty."</p> }>
                <table class="cart-items">
                    <thead class="cart-items__head">
                        <tr>
                            <th class="cart-items__num-label">"Num."</th>
                            <th class="cart-items__product-label">"Item"</th>
                            <th class="cart-items__price-label">"Price"</th>
                            <th class="cart-items__action">"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            store
                                .with(|s| s.cart.items.clone())
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    view! {
                                        <tr>
                                            <td>{row_number(index)}</td>
                                            <td class="cart-items__product">{item_label(&item)}</td>
                                            <td class="cart-items__price">{dollars(item.price)}</td>
                                            <td class="cart-items__action">
                                                <button on:click=move |_| remove(index)>"Remove"</button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                    <tfoot>
                        <tr>
                            <td colspan="2">"Total:"</td>
                            <td class="cart-items__total">{move || dollars_total(&total())}</td>
                            <td class="cart-items__action"></td>
                        </tr>
                    </tfoot>
                </table>
            </Show>
        </div>
    }
}

/// Drop the row at `position` from the root cart, then announce its variant id.
///
/// An out-of-range position changes nothing and publishes nothing.
fn remove_row(store: RwSignal<StoreState>, bus: &EventBus, position: usize) -> Option<CartItem> {
    let removed = store.try_update(|s| s.remove_cart_item(position)).flatten()?;
    bus.publish(Notification::CartItemDeleted(removed.variant));
    Some(removed)
}

fn row_number(index: usize) -> String {
    format!("{}.", index + 1)
}

fn item_label(item: &CartItem) -> String {
    format!("{} – {}", item.product, item.color)
}

fn dollars(price: f64) -> String {
    format!("$ {price}")
}

fn dollars_total(total: &str) -> String {
    format!("$ {total}")
}
