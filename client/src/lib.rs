//! # docview
//!
//! Leptos + WASM documentation viewer. A fixed menu links to routes, and each
//! route renders one Markdown file fetched from the server.
//!
//! This crate contains the route catalog, menu and document state, the
//! Markdown renderer, and the page components. The server links it with the
//! `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
