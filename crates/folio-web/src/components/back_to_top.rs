use folio_core::navigation::back_to_top_visible;
use leptos::prelude::*;

use crate::dom;

#[component]
pub fn BackToTop(scroll_y: ReadSignal<f64>) -> impl IntoView {
    let class = move || {
        if back_to_top_visible(scroll_y.get()) {
            "back-to-top show"
        } else {
            "back-to-top"
        }
    };

    view! {
        <button
            type="button"
            class=class
            aria-label="Back to top"
            on:click=move |_| dom::smooth_scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
