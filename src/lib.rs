//! # bank-portal-client
//!
//! Leptos + WASM browser client for the bank-portal demo: login and
//! registration views, a guarded dashboard, and the session bookkeeping
//! behind them (token storage, expiry evaluation, bearer-header
//! attachment).
//!
//! Everything that touches the browser is gated behind the `csr` feature,
//! so the crate also compiles natively and the session/auth logic is unit
//! tested off-browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: initialize console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
