//! # spotlight-client
//!
//! Leptos + WASM front end for the Spotlight submission portal.
//!
//! Two routes: a public submission form (name, social-media handle, image
//! uploads with local previews) and an admin dashboard that logs in,
//! hydrates the submissions list over REST, and appends new entries from a
//! WebSocket push feed. The backend is consumed as a black box under
//! `/api`; this crate contains pages, components, application state, and
//! the networking layer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
