//! Workout detail page: one workout, its exercises, and its notes.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::components::snackbar::Snackbar;
use crate::net::types::parse_sets;
use crate::state::session::Session;

/// Workout detail page — shows the workout's date and exercises, lets the
/// user edit notes, attach another exercise, or delete the workout.
#[component]
pub fn WorkoutDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    crate::util::auth::install_unauth_redirect(session, navigate.clone());
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let params = use_params_map();
    let workout_id = move || params.read().get("id").unwrap_or_default();

    let workout = LocalResource::new(move || {
        let id = workout_id();
        async move { crate::net::workouts::fetch_workout(&id).await }
    });

    let notes = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Seed the editable fields once the fetch lands.
    Effect::new(move || {
        if let Some(Some(w)) = workout.get() {
            notes.set(w.notes.clone());
            date.set(w.date.clone());
        }
    });

    let on_save_notes = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let id = workout_id();
            leptos::task::spawn_local(async move {
                match crate::net::workouts::update_workout(
                    &id,
                    &date.get_untracked(),
                    &notes.get_untracked(),
                )
                .await
                {
                    Ok(_) => notice.set("Notes saved.".to_owned()),
                    Err(e) => notice.set(format!("Failed to save notes: {e}")),
                }
                busy.set(false);
            });
        }
    });

    let on_delete = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let id = workout_id();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::workouts::delete_workout(&id).await {
                    Ok(()) => navigate("/workouts", NavigateOptions::default()),
                    Err(e) => {
                        notice.set(format!("Failed to delete workout: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
    });

    let add_exercise_href = move || format!("/exercises?workout_id={}", workout_id());

    view! {
        <div class="workout-detail-page">
            <Suspense fallback=move || view! { <p>"Loading workout..."</p> }>
                {move || {
                    workout
                        .get()
                        .map(|loaded| match loaded {
                            Some(w) => {
                                view! {
                                    <div class="workout-detail">
                                        <header class="workout-detail__header">
                                            <h1>{w.date.clone()}</h1>
                                            <button
                                                class="btn btn--danger"
                                                disabled=move || busy.get()
                                                on:click=move |_| on_delete.run(())
                                            >
                                                "Delete workout"
                                            </button>
                                        </header>
                                        <ul class="workout-detail__exercises">
                                            {w
                                                .exercises
                                                .iter()
                                                .map(|we| {
                                                    let href = format!(
                                                        "/sets?workout_exercise_id={}",
                                                        we.id
                                                    );
                                                    let set_count = parse_sets(&we.sets).len();
                                                    let name = we.exercise.name.clone();
                                                    let muscles = we.exercise.muscle_groups.clone();
                                                    view! {
                                                        <li class="workout-detail__exercise">
                                                            <a href=href>
                                                                <span class="workout-detail__exercise-name">{name}</span>
                                                                <span class="workout-detail__exercise-muscles">{muscles}</span>
                                                                <span class="workout-detail__exercise-sets">
                                                                    {format!("{set_count} sets")}
                                                                </span>
                                                            </a>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                        <a class="btn" href=add_exercise_href()>"Add exercise"</a>
                                        <div class="workout-detail__notes">
                                            <textarea
                                                class="workout-detail__notes-input"
                                                placeholder="Notes"
                                                prop:value=move || notes.get()
                                                on:input=move |ev| notes.set(event_target_value(&ev))
                                            ></textarea>
                                            <button
                                                class="btn"
                                                disabled=move || busy.get()
                                                on:click=move |_| on_save_notes.run(())
                                            >
                                                "Save notes"
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="workout-detail__error">"Workout not found."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <Snackbar message=notice/>
        </div>
    }
}
