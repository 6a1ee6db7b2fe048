//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;
use crate::util::clock;

/// Redirect to `/` whenever no valid session is present.
///
/// The check is a pure read against the wall clock: a session that passed
/// its TTL counts as absent even before any transition has swept it out.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let logged_in = session.with(|s| s.is_logged_in_at(clock::now_ms()));
        if !logged_in {
            navigate("/", NavigateOptions::default());
        }
    });
}
