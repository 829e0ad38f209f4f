//! # client
//!
//! Leptos + WASM frontend for the NexOps operations dashboard.
//!
//! This crate contains pages, presentational components, per-tab UI state,
//! the REST helpers that talk to `/api/v1`, and the pure formatting/chart
//! helpers the views render through. It is compiled twice: with `hydrate`
//! into the browser bundle and with `ssr` into the `nexops` host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
