//! Workouts page: the signed-in user's workout history.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::workout_card::WorkoutCard;
use crate::state::session::Session;

/// Workouts page — lists the user's workouts newest-first as cards.
/// Redirects home if no valid session is present.
#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    crate::util::auth::install_unauth_redirect(session, use_navigate());
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let workouts = LocalResource::new(|| crate::net::workouts::fetch_workouts());

    view! {
        <div class="workouts-page">
            <header class="workouts-page__header">
                <h1>"Workouts"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading workouts..."</p> }>
                {move || {
                    workouts
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) if !list.is_empty() => {
                                view! {
                                    <div class="workouts-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|w| {
                                                let exercise_count = w.exercises.len();
                                                view! {
                                                    <WorkoutCard
                                                        id=w.id
                                                        date=w.date
                                                        notes=w.notes
                                                        exercise_count=exercise_count
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(_) => {
                                view! { <p class="workouts-page__empty">"No workouts yet. Start one from the home page."</p> }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="workouts-page__error">"Failed to load workouts."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
