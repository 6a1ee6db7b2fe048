//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only state shared across every page, so it is the only
//! module here; list/filter state lives with the page that owns it. The
//! application root constructs one [`session::Session`] and provides it via
//! Leptos context.

pub mod session;
