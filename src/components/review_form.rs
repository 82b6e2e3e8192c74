//! Add-review form.

#[cfg(test)]
#[path = "review_form_test.rs"]
mod review_form_test;

use leptos::prelude::*;

use crate::events::{EventBus, Notification};
use crate::state::review::{
    RATING_CHOICES, RATING_PLACEHOLDER, ReviewDraft, error_heading, parse_rating, rating_value,
};

/// Review form. Publishes `review-submitted` and calls `on_review_sent` on success.
#[component]
pub fn ReviewForm(on_review_sent: Callback<()>) -> impl IntoView {
    let bus = expect_context::<EventBus>();
    let draft = RwSignal::new(ReviewDraft::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_form(draft, &bus, on_review_sent);
    };

    let errors = move || draft.with(ReviewDraft::error_messages);
    let has_errors = move || draft.with(|d| !d.errors.is_empty());

    view! {
        <form class="review-form" on:submit=on_submit>
            <h2>"Add a review"</h2>

            <p><small>"Fields marked with * are required!"</small></p>

            <p>
                <label for="name">"Name*:"</label>
                <input
                    id="name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.name = value);
                    }
                />

                <label for="rating">"Rating*:"</label>
                <select
                    id="rating"
                    prop:value=move || draft.with(|d| rating_value(d.rating))
                    on:change=move |ev| {
                        let rating = parse_rating(&event_target_value(&ev));
                        draft.update(|d| d.rating = rating);
                    }
                >
                    <option value=RATING_PLACEHOLDER>{RATING_PLACEHOLDER}</option>
                    {RATING_CHOICES
                        .into_iter()
                        .map(|rating| view! { <option value=rating.to_string()>{rating.to_string()}</option> })
                        .collect_view()}
                </select>
            </p>

            <p>
                <label for="review">"Review:"</label>
                <textarea
                    id="review"
                    rows="4"
                    prop:value=move || draft.with(|d| d.review.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.review = value);
                    }
                ></textarea>
            </p>

            <Show when=has_errors>
                <div class="review-form__errors">
                    <b>{move || error_heading(draft.with(|d| d.errors.len()))}</b>
                    <ul>
                        {move || errors().into_iter().map(|error| view! { <li>{error}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>

            <p>
                <input type="submit" value="Submit" />
            </p>
        </form>
    }
}

/// Validate the draft; on success publish the review and notify the parent.
///
/// Returns `true` when the review was accepted. A rejected draft keeps its
/// fields and carries the new error list.
fn submit_form(draft: RwSignal<ReviewDraft>, bus: &EventBus, on_review_sent: Callback<()>) -> bool {
    let Some(review) = draft.try_update(ReviewDraft::submit).flatten() else {
        log::debug!("review: rejected ({} errors)", draft.with_untracked(|d| d.errors.len()));
        return false;
    };
    bus.publish(Notification::ReviewSubmitted(review));
    on_review_sent.run(());
    true
}
