//! subpay Web Frontend
//!
//! Leptos-based WASM payment page driving the `subpay-core` controller.

mod api;
mod app;
mod components;
mod host;
mod pages;
mod session;

pub use app::App;
pub use host::BrowserHost;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
