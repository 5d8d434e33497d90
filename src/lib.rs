//! # chat-client
//!
//! Leptos + WASM frontend for the chat application's account screens:
//! login, signup, profile editing, and the landing placeholders.
//!
//! The session client (`state::session`) owns the authenticated user and the
//! per-request in-flight flags; pages bind form input to it, validate with
//! `util::validate`, and encode avatars with `util::image`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
