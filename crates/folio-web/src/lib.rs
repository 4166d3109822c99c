#[allow(clippy::unit_arg, clippy::unused_unit)]
mod app;
mod components;
mod dom;
mod visibility;

pub use app::{App, load_site_config};

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
///
/// This function is called automatically when the WASM module is loaded in the browser.
/// It installs the panic hook and console logger, then mounts the portfolio to the
/// document body.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("folio starting...");
    leptos::mount::mount_to_body(app::App);
}
