//! Sets page: record weight/reps for one workout exercise.
//!
//! The backend stores sets as an opaque JSON string on the workout exercise
//! row; every save round-trips the whole list through
//! `PUT /workout_exercises/{id}`.

#[cfg(test)]
#[path = "sets_test.rs"]
mod sets_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::components::snackbar::Snackbar;
use crate::net::types::{SetEntry, parse_sets};
use crate::state::session::Session;

/// Weight stepper increment, in the user's display unit.
const WEIGHT_STEP: f64 = 5.0;

/// Adjust weight by `delta`, clamped at zero.
fn bump_weight(weight: f64, delta: f64) -> f64 {
    (weight + delta).max(0.0)
}

/// Adjust reps by `delta`, clamped at a minimum of one rep.
fn bump_reps(reps: u32, delta: i32) -> u32 {
    let next = i64::from(reps) + i64::from(delta);
    u32::try_from(next.max(1)).unwrap_or(1)
}

/// Copy of `sets` with `entry` appended.
fn push_set(sets: &[SetEntry], entry: SetEntry) -> Vec<SetEntry> {
    let mut next = sets.to_vec();
    next.push(entry);
    next
}

/// Copy of `sets` without the entry at `index`; out-of-range is a no-op.
fn remove_set(sets: &[SetEntry], index: usize) -> Vec<SetEntry> {
    sets.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, entry)| *entry)
        .collect()
}

/// Sets page — weight/reps steppers plus the recorded list for one workout
/// exercise. Redirects home if no valid session is present.
#[component]
pub fn SetsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    crate::util::auth::install_unauth_redirect(session, navigate.clone());
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let query = use_query_map();
    let workout_exercise_id = move || query.read().get("workout_exercise_id").unwrap_or_default();

    let row = LocalResource::new(move || {
        let id = workout_exercise_id();
        async move {
            if id.is_empty() {
                None
            } else {
                crate::net::workouts::fetch_workout_exercise(&id).await
            }
        }
    });

    let exercise_name = RwSignal::new(String::new());
    let sets = RwSignal::new(Vec::<SetEntry>::new());
    let weight = RwSignal::new(0.0_f64);
    let reps = RwSignal::new(1_u32);
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Seed name and recorded sets once the fetch lands.
    Effect::new(move || {
        if let Some(Some(we)) = row.get() {
            exercise_name.set(we.exercise.name.clone());
            sets.set(parse_sets(&we.sets));
        }
    });

    // Persist `next` as the full replacement list, adopting the backend's
    // echo when it answers with a non-blank sets column.
    let save_sets = Callback::new(move |next: Vec<SetEntry>| {
        let id = workout_exercise_id();
        if id.is_empty() || busy.get() {
            return;
        }
        sets.set(next.clone());
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::workouts::update_workout_exercise_sets(&id, &next).await {
                Ok(we) if !we.sets.trim().is_empty() => sets.set(parse_sets(&we.sets)),
                Ok(_) => {}
                Err(e) => notice.set(format!("Failed to save sets: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = next;
        }
    });

    let on_save_set = move |_| {
        let entry = SetEntry {
            weight: weight.get_untracked(),
            reps: reps.get_untracked(),
        };
        save_sets.run(push_set(&sets.get_untracked(), entry));
    };

    let on_remove_exercise = Callback::new(move |()| {
        let id = workout_exercise_id();
        if id.is_empty() || busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::workouts::delete_workout_exercise(&id).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(_) => {
                        notice.set("Failed to remove exercise. Please try again.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
    });

    view! {
        <div class="sets-page">
            <header class="sets-page__header">
                <h1>{move || exercise_name.get()}</h1>
                <a class="sets-page__home" href="/">"Home"</a>
            </header>

            <div class="sets-page__steppers">
                <div class="stepper">
                    <span class="stepper__label">"Weight"</span>
                    <button
                        class="stepper__button"
                        on:click=move |_| weight.update(|w| *w = bump_weight(*w, -WEIGHT_STEP))
                    >
                        "-"
                    </button>
                    <span class="stepper__value">{move || format!("{}", weight.get())}</span>
                    <button
                        class="stepper__button"
                        on:click=move |_| weight.update(|w| *w = bump_weight(*w, WEIGHT_STEP))
                    >
                        "+"
                    </button>
                </div>
                <div class="stepper">
                    <span class="stepper__label">"Reps"</span>
                    <button
                        class="stepper__button"
                        on:click=move |_| reps.update(|r| *r = bump_reps(*r, -1))
                    >
                        "-"
                    </button>
                    <span class="stepper__value">{move || reps.get().to_string()}</span>
                    <button
                        class="stepper__button"
                        on:click=move |_| reps.update(|r| *r = bump_reps(*r, 1))
                    >
                        "+"
                    </button>
                </div>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=on_save_set>
                    "Save set"
                </button>
            </div>

            <ul class="sets-page__list">
                {move || {
                    sets.get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <li class="sets-page__set">
                                    <span class="sets-page__set-weight">
                                        {format!("{} lb", entry.weight)}
                                    </span>
                                    <span class="sets-page__set-reps">
                                        {format!("{} reps", entry.reps)}
                                    </span>
                                    <button
                                        class="btn btn--small"
                                        disabled=move || busy.get()
                                        on:click=move |_| {
                                            save_sets.run(remove_set(&sets.get_untracked(), index));
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>

            <button
                class="btn btn--danger"
                disabled=move || busy.get()
                on:click=move |_| on_remove_exercise.run(())
            >
                "Remove exercise"
            </button>
            <Snackbar message=notice/>
        </div>
    }
}
