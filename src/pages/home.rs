//! Home page: session-aware landing screen with a start-workout action.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::snackbar::Snackbar;
use crate::state::session::Session;
use crate::util::clock;

/// Home page — greets the signed-in user and starts a workout dated today.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let logged_in = move || session.with(|s| s.is_logged_in_at(clock::now_ms()));
    let email = move || {
        session.with(|s| s.user_at(clock::now_ms()))
            .map_or_else(String::new, |u| u.email)
    };

    let on_start = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        // Sweep expiry before acting so a stale session cannot start a workout.
        let live = session.try_update(|s| s.is_logged_in()).unwrap_or(false);
        if !live {
            notice.set("Your session has expired. Please log in again.".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::workouts::create_workout(&clock::today_ymd(), "").await {
                    Ok(workout) => {
                        navigate(&format!("/workouts/{}", workout.id), NavigateOptions::default());
                    }
                    Err(e) => {
                        notice.set(format!("Failed to start workout: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
    });

    view! {
        <div class="home-page">
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <div class="home-page__welcome">
                            <h1>"FitLog"</h1>
                            <p>"Track workouts, exercises, and sets."</p>
                            <a class="btn btn--primary" href="/login">"Log In"</a>
                            <a class="btn" href="/signup">"Sign Up"</a>
                        </div>
                    }
                }
            >
                <div class="home-page__dashboard">
                    <h1>"Welcome back"</h1>
                    <p class="home-page__email">{email}</p>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| on_start.run(())
                    >
                        "Start today's workout"
                    </button>
                    <a class="home-page__link" href="/workouts">"Past workouts"</a>
                </div>
            </Show>
            <Snackbar message=notice/>
        </div>
    }
}
