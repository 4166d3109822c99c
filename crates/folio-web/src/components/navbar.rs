use folio_core::config::NavLink;
use folio_core::navigation::{active_section, hash_target, navbar_scrolled};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::dom;

/// Fixed top navigation with scroll spy, smooth anchor scrolling and the
/// theme toggle.
#[component]
pub fn Navbar(
    brand: String,
    links: Vec<NavLink>,
    resume_url: String,
    scroll_y: ReadSignal<f64>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(None::<String>);

    Effect::new(move |_| {
        let y = scroll_y.get();
        let sections = dom::section_bounds();
        let current = active_section(y, &sections).map(str::to_owned);
        if active.get_untracked() != current {
            set_active.set(current);
        }
    });

    let navbar_class = move || {
        if navbar_scrolled(scroll_y.get()) {
            "navbar navbar-expand-lg fixed-top navbar-scrolled"
        } else {
            "navbar navbar-expand-lg fixed-top"
        }
    };

    let collapse_class = move || {
        if menu_open.get() {
            "collapse navbar-collapse show"
        } else {
            "collapse navbar-collapse"
        }
    };

    let download_resume = move |_| dom::open_in_new_tab(&resume_url);

    let items = links
        .into_iter()
        .map(|link| {
            let href = link.href();
            let id = link.id.clone();
            let target = href.clone();
            let on_click = move |ev: MouseEvent| {
                let Some(section) = hash_target(&target) else {
                    return;
                };
                ev.prevent_default();
                set_menu_open.set(false);
                if !dom::scroll_to_section(section) {
                    log::debug!("No section for {}", target);
                }
            };
            let link_class = move || {
                if active.get().as_deref() == Some(id.as_str()) {
                    "nav-link active"
                } else {
                    "nav-link"
                }
            };
            view! {
                <li class="nav-item">
                    <a class=link_class href=href on:click=on_click>{link.label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=navbar_class id="mainNav">
            <div class="container">
                <a class="navbar-brand" href="#home">{brand}</a>
                <button
                    class="navbar-toggler"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class=collapse_class id="navbarNav">
                    <ul class="navbar-nav ms-auto align-items-center">
                        {items}
                        <li class="nav-item ms-lg-2">
                            <button type="button" class="btn btn-outline-primary btn-sm" on:click=download_resume>
                                <i class="fas fa-download me-1"></i>
                                "Resume"
                            </button>
                        </li>
                        <li class="nav-item ms-lg-2">
                            <ThemeToggle/>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
