//! # client
//!
//! Leptos + WASM frontend for the Democracy Hub.
//!
//! This crate contains the router, the hub and embedded-viewer pages, the
//! per-panel components, explicit per-panel state, and the REST helpers that
//! talk to the AI-backed backend. The `ssr` feature is used by the host
//! binary for server rendering; the `hydrate` feature builds the browser
//! bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
