//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::cart_drawer::CartDrawer;
use crate::components::product_display::ProductDisplay;
use crate::events::EventBus;
use crate::state::cart::CartItem;
use crate::state::store::StoreState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the cart, the cart-visibility flag and the premium flag, and provides
/// them together with the relay bus to every descendant.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(StoreState::default());
    provide_context(store);
    provide_context(EventBus::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StorefrontPage/>
            </Routes>
        </Router>
    }
}

/// Header with the cart toggle, the product display and the cart drawer.
#[component]
fn StorefrontPage() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();

    let premium = Signal::derive(move || store.with(|s| s.premium));
    let on_add_to_cart = Callback::new(move |item: CartItem| store.update(|s| s.add_to_cart(item)));

    view! {
        <div class="nav-bar">
            <button class="cart" on:click=move |_| store.update(StoreState::toggle_cart_visibility)>
                {move || store.with(StoreState::cart_label)}
            </button>
        </div>

        <div id="app">
            <ProductDisplay premium=premium on_add_to_cart=on_add_to_cart />
            <CartDrawer />
        </div>
    }
}
