//! # client
//!
//! Leptos + WASM frontend for the LearnHub student portal: the certificate
//! gallery and the public course-evaluation explorer.
//!
//! Pages fetch JSON from the LearnHub REST API through `net::api`; the
//! loading, error and stale-response rules live in `state` so they can be
//! tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
