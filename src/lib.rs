//! # chatbot-widget
//!
//! Leptos + WASM floating chat widget: a launcher button that opens a
//! conversation panel backed by a remote chat API, shown only to users
//! with an active session.
//!
//! This crate contains the widget components, the per-mount conversation
//! and auth state, and the REST client for the chat backend. The backend
//! and the auth provider are external services; this is the browser side
//! only.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
