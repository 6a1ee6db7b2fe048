//! New-exercise page: create a catalog entry and attach it to the workout.

#[cfg(test)]
#[path = "new_exercise_test.rs"]
mod new_exercise_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::components::snackbar::Snackbar;

/// Trim and require the exercise name; the other fields are free-form.
fn validate_exercise_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Exercise name is required.");
    }
    Ok(name.to_owned())
}

/// New-exercise page — creates the exercise, attaches it to the workout from
/// the query string, and continues straight to recording sets.
#[component]
pub fn NewExercisePage() -> impl IntoView {
    let query = use_query_map();
    let workout_id = move || query.read().get("workout_id").unwrap_or_default();

    let name = RwSignal::new(String::new());
    let muscle_groups = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = match validate_exercise_name(&name.get()) {
            Ok(value) => value,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        let workout = workout_id();
        if workout.is_empty() {
            notice.set("Start a workout first, then add exercises.".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let muscle_groups_value = muscle_groups.get_untracked();
            let notes_value = notes.get_untracked();
            leptos::task::spawn_local(async move {
                let attached = async {
                    let exercise = crate::net::exercises::create_exercise(
                        &name_value,
                        &muscle_groups_value,
                        &notes_value,
                    )
                    .await?;
                    crate::net::workouts::add_workout_exercise(&workout, &exercise.id).await
                }
                .await;
                match attached {
                    Ok(we) => {
                        navigate(
                            &format!("/sets?workout_exercise_id={}", we.id),
                            NavigateOptions::default(),
                        );
                    }
                    Err(e) => {
                        log::error!("create exercise flow failed: {e}");
                        notice.set("Failed to create exercise or add to workout".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, workout);
        }
    };

    view! {
        <div class="new-exercise-page">
            <h1>"New exercise"</h1>
            <form class="new-exercise-form" on:submit=on_submit>
                <input
                    class="new-exercise-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="new-exercise-input"
                    type="text"
                    placeholder="Muscle groups (e.g. chest, triceps)"
                    prop:value=move || muscle_groups.get()
                    on:input=move |ev| muscle_groups.set(event_target_value(&ev))
                />
                <textarea
                    class="new-exercise-input new-exercise-input--notes"
                    placeholder="Notes"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create and add to workout"
                </button>
            </form>
            <Snackbar message=notice/>
        </div>
    }
}
