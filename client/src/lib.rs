//! # client
//!
//! Leptos + WASM frontend for the poster studio.
//!
//! Pages and components render [`poster::state::PosterState`] from a single
//! signal; the `util` bridges implement the core's capability traits on top of
//! the browser (background removal, `html2canvas`, anchor downloads, alerts).
//! Browser-only code is compiled under the `hydrate` feature; the `ssr` build
//! renders the same views on the server.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
