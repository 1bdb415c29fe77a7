//! Axiom waitlist
//!
//! Landing page for the Axiom AI-agent product with an account-aware waitlist
//! signup, built with Leptos and WebAssembly. The server renders the page and
//! proxies waitlist and auth calls to the hosted backend.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
