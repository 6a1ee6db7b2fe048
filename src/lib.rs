//! # fitlog-client
//!
//! Leptos + WASM front-end for the FitLog fitness-tracking application.
//! A user signs in, starts workouts, attaches exercises from a shared
//! catalog, and records sets (weight/reps); administrators can review the
//! user roster.
//!
//! This crate contains pages, components, application state (including the
//! TTL-bounded session manager in [`state::session`]), and the REST wire
//! layer. Browser-only behavior is gated behind the `hydrate` feature;
//! server rendering behind `ssr`. With neither feature active the crate
//! compiles natively so all pure logic is testable with `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
