//! Reusable card component for workout list items.

use leptos::prelude::*;

/// A clickable card representing a workout in the workouts list.
#[component]
pub fn WorkoutCard(id: String, date: String, notes: String, exercise_count: usize) -> impl IntoView {
    let href = format!("/workouts/{id}");
    let exercise_label = if exercise_count == 1 {
        "1 exercise".to_owned()
    } else {
        format!("{exercise_count} exercises")
    };
    let has_notes = !notes.is_empty();

    view! {
        <a class="workout-card" href=href>
            <span class="workout-card__date">{date}</span>
            <span class="workout-card__count">{exercise_label}</span>
            <Show when=move || has_notes>
                <span class="workout-card__notes">{notes.clone()}</span>
            </Show>
        </a>
    }
}
