//! # create4me-client
//!
//! Leptos + WASM frontend for the Create4Me influencer-marketing platform.
//! Connects Ethiopian brands with content creators: brands publish
//! campaigns, creators discover and apply to them, and either side can
//! request connections.
//!
//! This crate contains pages, components, application state, the typed
//! API client for the Express backend, and browser storage helpers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered page into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
