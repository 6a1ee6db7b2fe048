//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and list items while reading/writing the
//! session from the Leptos context provider in `app`.

pub mod nav;
pub mod snackbar;
pub mod users_list;
pub mod workout_card;
