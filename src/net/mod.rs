//! Networking modules for the FitLog REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth and the admin roster, `workouts` and `exercises` cover
//! the training domain, and `types` defines the shared wire schema. All
//! requests carry cookie credentials because the backend session is an
//! HttpOnly cookie.

pub mod api;
pub mod exercises;
pub mod types;
pub mod workouts;

/// Base URL of the backend REST API.
pub const API_BASE: &str = "https://api.fitlogapp.com";

/// Join an API path onto the configured base URL.
pub fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}
