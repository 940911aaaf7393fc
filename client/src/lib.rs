//! # aits-client
//!
//! Leptos + WASM frontend for the Academic Issue Tracking System support
//! portal. Renders role-scoped dashboards, issue views, messaging, and the
//! login/role-selection screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! All issue data is mock data held in client-local state. The `server`
//! crate renders this app with SSR and serves the hydration bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
