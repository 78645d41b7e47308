//! # client
//!
//! Leptos + WASM frontend for the Expense Sense personal-finance product.
//! Replaces the React + Next.js `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, session state, the REST wrapper,
//! and the persisted session store. All business logic (categorisation,
//! fraud scoring, prediction) lives behind the backend REST API; the client
//! only shapes and renders its responses.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered DOM into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
