//! Exercise picker page with live filtering.
//!
//! Reached from a workout (or the home shortcut) with the target workout in
//! the query string; picking an exercise attaches it and returns.

#[cfg(test)]
#[path = "exercises_test.rs"]
mod exercises_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::components::snackbar::Snackbar;
use crate::net::types::Exercise;

/// Lowercase and strip everything but ASCII letters and digits.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// True when the normalized filter matches the exercise name or muscle
/// groups.
fn matches_filter(exercise: &Exercise, normalized_filter: &str) -> bool {
    if normalized_filter.is_empty() {
        return true;
    }
    normalize(&exercise.name).contains(normalized_filter)
        || normalize(&exercise.muscle_groups).contains(normalized_filter)
}

/// Active exercises filtered for display, preserving catalog order.
fn filter_exercises(items: &[Exercise], filter: &str) -> Vec<Exercise> {
    let normalized = normalize(filter);
    items
        .iter()
        .filter(|ex| ex.active && matches_filter(ex, &normalized))
        .cloned()
        .collect()
}

/// Exercise picker page — filterable catalog; picking an exercise attaches
/// it to the workout named in the query string.
#[component]
pub fn ExercisesPage() -> impl IntoView {
    let query = use_query_map();
    let workout_id = move || query.read().get("workout_id").unwrap_or_default();
    let from_home = move || query.read().get("from_home").is_some_and(|v| v == "true");

    let exercises = LocalResource::new(|| crate::net::exercises::fetch_exercises());
    let filter = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_pick = Callback::new(move |exercise_id: String| {
        if busy.get() {
            return;
        }
        let workout = workout_id();
        if workout.is_empty() {
            notice.set("Start a workout first, then add exercises.".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let go_home = from_home();
            leptos::task::spawn_local(async move {
                match crate::net::workouts::add_workout_exercise(&workout, &exercise_id).await {
                    Ok(_) => {
                        let target = if go_home {
                            "/".to_owned()
                        } else {
                            format!("/workouts/{workout}")
                        };
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(e) => {
                        notice.set(format!("Failed to add exercise: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (exercise_id, from_home());
        }
    });

    let new_exercise_href = move || format!("/exercises/new?workout_id={}", workout_id());

    view! {
        <div class="exercises-page">
            <header class="exercises-page__header">
                <h1>"Exercises"</h1>
                <a class="btn" href=new_exercise_href>"New exercise"</a>
            </header>
            <input
                class="exercises-page__filter"
                type="text"
                placeholder="Filter by name or muscle group"
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
            <Suspense fallback=move || view! { <p>"Loading exercises..."</p> }>
                {move || {
                    exercises
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) => {
                                let visible = filter_exercises(&list, &filter.get());
                                view! {
                                    <ul class="exercises-page__list">
                                        {visible
                                            .into_iter()
                                            .map(|ex| {
                                                let id = ex.id.clone();
                                                view! {
                                                    <li class="exercises-page__item">
                                                        <span class="exercises-page__name">{ex.name}</span>
                                                        <span class="exercises-page__muscles">{ex.muscle_groups}</span>
                                                        <button
                                                            class="btn btn--small"
                                                            disabled=move || busy.get()
                                                            on:click=move |_| on_pick.run(id.clone())
                                                        >
                                                            "Add"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="exercises-page__error">"Failed to load exercises."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <Snackbar message=notice/>
        </div>
    }
}
