//! REST API helpers for the shared exercise catalog.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with cookie
//! credentials. Server-side (SSR): stubs returning `None`/error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "exercises_test.rs"]
mod exercises_test;

use super::types::Exercise;

#[cfg(any(test, feature = "hydrate"))]
fn create_exercise_failed_message(status: u16) -> String {
    format!("create exercise failed: {status}")
}

/// Fetch the visible exercise catalog from `GET /exercises`.
///
/// The backend scopes the list to public exercises plus the caller's own.
/// Returns `None` on failure or on the server.
pub async fn fetch_exercises() -> Option<Vec<Exercise>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&crate::net::endpoint("/exercises"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Exercise>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create a private exercise via `POST /exercises`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn create_exercise(
    name: &str,
    muscle_groups: &str,
    notes: &str,
) -> Result<Exercise, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "name": name,
            "muscleGroups": muscle_groups,
            "notes": notes,
            "isPublic": false,
        });
        let resp = gloo_net::http::Request::post(&crate::net::endpoint("/exercises"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_exercise_failed_message(resp.status()));
        }
        resp.json::<Exercise>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, muscle_groups, notes);
        Err("not available on server".to_owned())
    }
}
