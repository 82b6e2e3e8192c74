//! Tabbed reviews panel: review list and the add-review form.
//!
//! DESIGN
//! ======
//! The panel owns only its tab selection. Reviews come in as a read-only prop
//! from the product display, and the form's `on_review_sent` callback flips
//! the panel back to the list.

#[cfg(test)]
#[path = "product_tabs_test.rs"]
mod product_tabs_test;

use leptos::prelude::*;

use crate::components::review_form::ReviewForm;
use crate::state::review::Review;
use crate::state::ui::{ReviewTab, TabsState};

/// Reviews list and add-review form behind a two-tab strip.
#[component]
pub fn ProductTabs(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    let tabs = RwSignal::new(TabsState::default());
    let showing = move |tab: ReviewTab| tabs.with(|t| t.is_selected(tab));
    let on_review_sent = review_sent_callback(tabs);

    view! {
        <section class="section-reviews">
            <ul class="tabs">
                {ReviewTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <li
                                class="tab"
                                class:active-tab=move || showing(tab)
                                on:click=move |_| tabs.update(|t| t.select(tab))
                            >
                                {tab.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div style:display=move || display_for(showing(ReviewTab::Reviews))>
                <h2>"Reviews"</h2>
                <Show
                    when=move || !reviews.with(Vec::is_empty)
                    fallback=|| view! { <p>"There are no reviews yet."</p> }
                >
                    <ul class="review-list">
                        {move || {
                            reviews
                                .get()
                                .into_iter()
                                .map(|review| {
                                    view! {
                                        <li>
                                            <p>
                                                <span class="review__name">{review.name}</span>
                                                <span class="review__rating">{rating_label(review.rating)}</span>
                                            </p>
                                            <p class="review__text">{review.review.unwrap_or_default()}</p>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>

            <div style:display=move || display_for(showing(ReviewTab::AddReview))>
                <ReviewForm on_review_sent=on_review_sent />
            </div>
        </section>
    }
}

/// Callback handed to the form: a sent review flips the panel back to the list.
pub(crate) fn review_sent_callback(tabs: RwSignal<TabsState>) -> Callback<()> {
    Callback::new(move |()| tabs.update(TabsState::show_reviews))
}

fn rating_label(rating: u8) -> String {
    format!("Rating: {rating}")
}

/// CSS `display` for a tab body. Hidden tabs stay mounted so the form keeps its draft.
fn display_for(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}
