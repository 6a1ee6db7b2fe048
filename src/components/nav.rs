//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::util::clock;

/// Top navigation bar.
///
/// Shows workout/exercise links and logout while a session is live, the
/// admin roster link for admins, and login/signup links otherwise.
#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let logged_in = move || session.with(|s| s.is_logged_in_at(clock::now_ms()));
    let is_admin = move || session.with(|s| s.is_admin_at(clock::now_ms()));
    let email = move || {
        session.with(|s| s.user_at(clock::now_ms()))
            .map_or_else(String::new, |u| u.email)
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                // Clear local state no matter what the request did.
                session.update(|s| s.clear_user());
                // Navigate home via window.location for a clean state.
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">"FitLog"</a>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <div class="nav__links">
                            <a class="nav__link" href="/login">"Log In"</a>
                            <a class="nav__link" href="/signup">"Sign Up"</a>
                        </div>
                    }
                }
            >
                <div class="nav__links">
                    <a class="nav__link" href="/workouts">"Workouts"</a>
                    <Show when=is_admin>
                        <a class="nav__link" href="/users">"Users"</a>
                    </Show>
                    <span class="nav__email">{email}</span>
                    <button class="nav__logout" on:click=on_logout>
                        "Log Out"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
