//! Dark/light theme toggle persisted in `localStorage`.

use folio_core::theme::{
    THEME_ATTRIBUTE, THEME_STORAGE_KEY, THEME_TRANSITION, THEME_TRANSITION_CLASS, Theme,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::Storage;

use crate::dom;

fn local_storage() -> Option<Storage> {
    match window().local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {:?}", err);
            None
        }
    }
}

/// Read the stored theme, defaulting to dark.
fn stored_theme() -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

fn save_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("Failed to save theme preference: {:?}", err);
    }
}

/// Set the theme attribute and let colors ease into it.
fn apply_theme(theme: Theme) {
    dom::set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
    dom::set_body_class(THEME_TRANSITION_CLASS, true);
    Timeout::new(dom::millis(THEME_TRANSITION), || {
        dom::set_body_class(THEME_TRANSITION_CLASS, false);
    })
    .forget();
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let initial = stored_theme();
    apply_theme(initial);

    let theme = RwSignal::new(initial);

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        apply_theme(next);
        save_theme(next);
        theme.set(next);
    };

    view! {
        <button
            id="theme-toggle"
            type="button"
            class="btn theme-toggle"
            aria-label=move || theme.get().toggle_label()
            on:click=toggle
        >
            <i class=move || format!("fas {}", theme.get().icon_class())></i>
        </button>
    }
}
