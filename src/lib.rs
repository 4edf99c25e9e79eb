//! # channelboard
//!
//! Leptos + WASM frontend for the channel-analytics application: a catalog
//! registration form for content channels, per-channel statistics charts,
//! and a discussion-topic board.
//!
//! This crate contains pages, components, the REST gateway, client state,
//! static enumeration data, and the localization table. The form lifecycle
//! lives in the sibling `forms` crate and the time-series presentation logic
//! in the sibling `charts` crate; this crate wires both into the reactive
//! UI layer.

pub mod app;
pub mod components;
pub mod data;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: set up panics + logging, then mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
