//! # client
//!
//! Leptos + WASM frontend for the session demo: a login / registration /
//! dashboard flow over the in-memory mock auth service from the `auth`
//! crate, plus a data-driven 404 page.
//!
//! Session state is owned by [`components::session_provider::SessionProvider`]
//! and shared with every screen through [`state::session::SessionContext`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
