//! Shared wire DTOs for the FitLog REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless; structs rename fields rather than restructure payloads. Unknown
//! fields the backend may add are ignored on deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// An authenticated user as carried in the client session.
///
/// Immutable once received; a new login replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Authorization role driving admin-only UI.
    pub role: UserRole,
    /// Account email address.
    pub email: String,
    /// Last modification timestamp (ISO-8601).
    pub updated_at: String,
}

/// Response payload of `POST /users/login`.
///
/// `user` is absent when the backend answered OK without authenticating;
/// the session layer treats that the same as an authentication failure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub user: Option<LoginUser>,
}

/// User as it appears in the login payload; `updatedAt` may be omitted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: String,
    pub role: UserRole,
    pub email: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl LoginUser {
    /// Normalize into a [`User`], substituting `fallback_updated_at` when
    /// the backend omitted the timestamp.
    pub fn into_user(self, fallback_updated_at: &str) -> User {
        User {
            id: self.id,
            role: self.role,
            email: self.email,
            updated_at: self
                .updated_at
                .unwrap_or_else(|| fallback_updated_at.to_owned()),
        }
    }
}

/// A row in the admin user roster (`GET /users`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Authorization role.
    pub role: UserRole,
    /// Account creation timestamp (ISO-8601), if the backend exposes it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last modification timestamp (ISO-8601), if the backend exposes it.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A workout session owned by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique workout identifier (UUID string).
    pub id: String,
    /// Calendar date of the workout (`YYYY-MM-DD`).
    pub date: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Exercises attached to this workout, in position order.
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    /// Creation timestamp (ISO-8601), if the backend exposes it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last modification timestamp (ISO-8601), if the backend exposes it.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// An exercise from the shared catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique exercise identifier (UUID string).
    pub id: String,
    /// Display name (e.g. `"Bench Press"`).
    pub name: String,
    /// Comma-separated muscle groups (e.g. `"chest, triceps"`).
    #[serde(default)]
    pub muscle_groups: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Whether the exercise is visible to every user.
    #[serde(default)]
    pub public: bool,
    /// Soft-delete flag; inactive exercises are hidden from pickers.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// The join row attaching an [`Exercise`] to a [`Workout`].
///
/// The backend stores the recorded sets as an opaque JSON string; decode it
/// with [`parse_sets`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Unique identifier (UUID string).
    pub id: String,
    /// The attached exercise.
    pub exercise: Exercise,
    /// JSON-encoded list of [`SetEntry`] values.
    #[serde(default)]
    pub sets: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Ordering within the workout.
    #[serde(default)]
    pub position: i32,
}

/// One recorded set for a workout exercise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Weight moved, in the user's display unit.
    pub weight: f64,
    /// Repetition count.
    pub reps: u32,
}

/// Generic message body some endpoints answer with.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Decode the JSON-encoded `sets` column into entries.
///
/// Blank or malformed content decodes to an empty list so a corrupt row
/// never wedges the UI.
pub fn parse_sets(raw: &str) -> Vec<SetEntry> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encode entries back into the JSON string the backend stores.
pub fn encode_sets(sets: &[SetEntry]) -> String {
    serde_json::to_string(sets).unwrap_or_else(|_| "[]".to_owned())
}
