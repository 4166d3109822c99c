//! Rotating body background.

use folio_core::background::BackgroundCycle;
use folio_core::config::BackgroundConfig;
use gloo_timers::callback::Interval;

use crate::dom;

/// Swap the `<body>` class every interval for as long as the page is open.
pub fn start_rotation(config: &BackgroundConfig) {
    if config.classes.is_empty() {
        return;
    }
    let mut cycle = BackgroundCycle::new(config.classes.clone());
    Interval::new(dom::millis(config.interval()), move || {
        dom::replace_body_class(cycle.advance());
    })
    .forget();
}
