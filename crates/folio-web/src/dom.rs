//! Thin wrappers over the browser APIs the components need.

use folio_core::navigation::{SectionBounds, anchor_scroll_top};
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

/// Milliseconds for the gloo timer APIs.
pub fn millis(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Scroll so a section sits just below the fixed navbar. Returns `false`
/// when no element has that id.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(section) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    smooth_scroll_to(anchor_scroll_top(section.offset_top() as f64));
    true
}

pub fn scroll_into_view_centered(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Bounds of every `<section id>` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Ok(sections) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBounds::new(
                section.id(),
                section.offset_top() as f64,
                section.offset_height() as f64,
            )
        })
        .collect()
}

pub fn current_url() -> String {
    window().location().href().unwrap_or_default()
}

pub fn open_in_new_tab(url: &str) {
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("Failed to open {}: {:?}", url, err);
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, present: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let result = if present {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        log::warn!("Failed to update body class {}: {:?}", class, err);
    }
}

/// Replace every class on `<body>`.
pub fn replace_body_class(class: &str) {
    match document().body() {
        Some(body) => body.set_class_name(class),
        None => log::warn!("No <body> to apply background {}", class),
    }
}

pub fn set_root_attribute(name: &str, value: &str) {
    let Some(root) = document().document_element() else {
        log::warn!("No document element to set {}", name);
        return;
    };
    if let Err(err) = root.set_attribute(name, value) {
        log::warn!("Failed to set {}: {:?}", name, err);
    }
}

/// Report an event to Google Analytics when `gtag` is loaded on the page.
pub fn track_event(event: &str, category: &str, label: &str) {
    let Ok(gtag) = js_sys::Reflect::get(&window(), &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        return;
    };

    let params = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&params, &"event_category".into(), &category.into());
    let _ = js_sys::Reflect::set(&params, &"event_label".into(), &label.into());

    if let Err(err) = gtag.call3(&JsValue::NULL, &"event".into(), &event.into(), &params) {
        log::warn!("gtag call failed: {:?}", err);
    }
}
