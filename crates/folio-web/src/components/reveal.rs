//! Scroll reveal wrapper.

use folio_core::reveal::{AnimationKind, REVEAL_THRESHOLD, RevealState, parse_delay};
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::visibility::{observer_supported, on_first_visible};

fn reveal_class(base: &str, state: RevealState) -> String {
    match (base.is_empty(), state.is_animated()) {
        (true, true) => "animated".to_string(),
        (false, true) => format!("{} animated", base),
        _ => base.to_string(),
    }
}

/// Animate children in the first time they scroll into view.
///
/// `animation` is one of `fade-up`, `fade-down`, `fade-left`, `fade-right`
/// or `width-expand`; anything else is only marked `animated`. `delay` is in
/// milliseconds.
#[component]
pub fn Reveal(
    #[prop(into)] animation: String,
    #[prop(optional, into)] delay: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let kind = AnimationKind::from_attr(&animation);
    let delay_ms = parse_delay(delay.as_deref());
    let state = RwSignal::new(RevealState::Pending);
    let node = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if !observer_supported() {
            state.set(RevealState::Static);
            return;
        }
        on_first_visible(&el, REVEAL_THRESHOLD, move || {
            Timeout::new(delay_ms, move || {
                state.update(|s| {
                    s.trigger();
                });
            })
            .forget();
        });
    });

    view! {
        <div
            node_ref=node
            class=move || reveal_class(&class, state.get())
            data-animation=animation
            data-delay=delay
            style=move || kind.style(state.get()).map(|rule| rule.to_string())
        >
            {children.map(|children| children())}
        </div>
    }
}
