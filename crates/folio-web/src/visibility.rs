//! Trigger-once-on-visibility.
//!
//! Reveal animations, skill bars, counters and the typing effect all want the
//! same thing: run a callback the first time an element scrolls into view,
//! then stop watching it.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Whether the browser can observe element visibility.
pub fn observer_supported() -> bool {
    js_sys::Reflect::has(&leptos::prelude::window(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

/// Run `on_visible` once, the first time at least `threshold` of `target`
/// is inside the viewport. The element is unobserved right away, so later
/// intersections never call back again.
///
/// Without `IntersectionObserver` support the callback runs immediately.
pub fn on_first_visible(target: &Element, threshold: f64, on_visible: impl FnOnce() + 'static) {
    if !observer_supported() {
        log::warn!("IntersectionObserver unavailable, running effect immediately");
        on_visible();
        return;
    }

    let pending = Rc::new(RefCell::new(Some(on_visible)));
    let callback_slot = pending.clone();

    let handler = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                observer.unobserve(&entry.target());
                observer.disconnect();
                if let Some(callback) = callback_slot.borrow_mut().take() {
                    callback();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(handler.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            // the observer owns the callback for the rest of the page's life
            handler.forget();
        }
        Err(err) => {
            log::warn!("Failed to create IntersectionObserver: {:?}", err);
            if let Some(callback) = pending.borrow_mut().take() {
                callback();
            }
        }
    }
}
