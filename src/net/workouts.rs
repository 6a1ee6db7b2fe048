//! REST API helpers for workouts and their attached exercises.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with cookie
//! credentials. Server-side (SSR): stubs returning `None`/error.
//!
//! The backend models the workout/exercise attachment as a separate
//! `workout_exercises` resource; recorded sets live on that row as an opaque
//! JSON string (see [`crate::net::types::parse_sets`]).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "workouts_test.rs"]
mod workouts_test;

use super::types::{SetEntry, Workout, WorkoutExercise};
#[cfg(feature = "hydrate")]
use super::types::encode_sets;

#[cfg(any(test, feature = "hydrate"))]
fn workout_endpoint(id: &str) -> String {
    crate::net::endpoint(&format!("/workouts/{id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn workout_exercise_endpoint(id: &str) -> String {
    crate::net::endpoint(&format!("/workout_exercises/{id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Create a workout via `POST /workouts`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn create_workout(date: &str, notes: &str) -> Result<Workout, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "date": date, "notes": notes });
        let resp = gloo_net::http::Request::post(&crate::net::endpoint("/workouts"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create workout", resp.status()));
        }
        resp.json::<Workout>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (date, notes);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's workouts from `GET /workouts`.
///
/// Returns `None` on failure or on the server.
pub async fn fetch_workouts() -> Option<Vec<Workout>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&crate::net::endpoint("/workouts"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Workout>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a single workout from `GET /workouts/{id}`.
///
/// Returns `None` when the workout is missing, on failure, or on the server.
pub async fn fetch_workout(id: &str) -> Option<Workout> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&workout_endpoint(id))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Workout>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Update a workout's date/notes via `PUT /workouts/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn update_workout(id: &str, date: &str, notes: &str) -> Result<Workout, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "date": date, "notes": notes });
        let resp = gloo_net::http::Request::put(&workout_endpoint(id))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("update workout", resp.status()));
        }
        resp.json::<Workout>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, date, notes);
        Err("not available on server".to_owned())
    }
}

/// Delete a workout via `DELETE /workouts/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn delete_workout(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&workout_endpoint(id))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete workout", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Attach an exercise to a workout via `POST /workout_exercises`.
///
/// The new row starts with no recorded sets.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn add_workout_exercise(
    workout_id: &str,
    exercise_id: &str,
) -> Result<WorkoutExercise, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "workoutId": workout_id,
            "exerciseId": exercise_id,
            "sets": "",
            "notes": "",
        });
        let resp = gloo_net::http::Request::post(&crate::net::endpoint("/workout_exercises"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("add exercise", resp.status()));
        }
        resp.json::<WorkoutExercise>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (workout_id, exercise_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch a workout exercise row from `GET /workout_exercises/{id}`.
///
/// Returns `None` when the row is missing, on failure, or on the server.
pub async fn fetch_workout_exercise(id: &str) -> Option<WorkoutExercise> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&workout_exercise_endpoint(id))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<WorkoutExercise>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Replace a workout exercise's recorded sets via `PUT /workout_exercises/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn update_workout_exercise_sets(
    id: &str,
    sets: &[SetEntry],
) -> Result<WorkoutExercise, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "sets": encode_sets(sets) });
        let resp = gloo_net::http::Request::put(&workout_exercise_endpoint(id))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("save sets", resp.status()));
        }
        resp.json::<WorkoutExercise>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, sets);
        Err("not available on server".to_owned())
    }
}

/// Detach an exercise from its workout via `DELETE /workout_exercises/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn delete_workout_exercise(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&workout_exercise_endpoint(id))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("remove exercise", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
