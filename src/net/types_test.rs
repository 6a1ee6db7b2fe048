use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        role: UserRole::User,
        email: "a@b.com".to_owned(),
        updated_at: "2025-01-01T00:00:00.000Z".to_owned(),
    }
}

// =============================================================
// UserRole serde
// =============================================================

#[test]
fn user_role_serializes_to_uppercase_tokens() {
    assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"USER\"");
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
}

#[test]
fn user_role_deserializes_from_uppercase_tokens() {
    assert_eq!(serde_json::from_str::<UserRole>("\"USER\"").unwrap(), UserRole::User);
    assert_eq!(serde_json::from_str::<UserRole>("\"ADMIN\"").unwrap(), UserRole::Admin);
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_round_trips_with_camel_case_fields() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("\"updatedAt\""));
    assert_eq!(serde_json::from_str::<User>(&json).unwrap(), user);
}

#[test]
fn user_ignores_unknown_backend_fields() {
    let json = r#"{
        "id": "u-1",
        "role": "ADMIN",
        "email": "admin@b.com",
        "updatedAt": "2025-01-01T00:00:00.000Z",
        "createdAt": "2024-12-31T00:00:00.000Z",
        "password": "$2a$10$hash"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, UserRole::Admin);
}

// =============================================================
// LoginPayload
// =============================================================

#[test]
fn login_payload_with_user_parses() {
    let json = r#"{"user": {"id": "u-1", "role": "USER", "email": "a@b.com"}}"#;
    let payload: LoginPayload = serde_json::from_str(json).unwrap();
    let user = payload.user.unwrap();
    assert_eq!(user.id, "u-1");
    assert!(user.updated_at.is_none());
}

#[test]
fn login_payload_without_user_parses_to_none() {
    let payload: LoginPayload = serde_json::from_str("{}").unwrap();
    assert!(payload.user.is_none());
}

#[test]
fn login_user_normalization_fills_missing_updated_at() {
    let login_user = LoginUser {
        id: "u-1".to_owned(),
        role: UserRole::User,
        email: "a@b.com".to_owned(),
        updated_at: None,
    };
    let user = login_user.into_user("2025-06-01T12:00:00.000Z");
    assert_eq!(user.updated_at, "2025-06-01T12:00:00.000Z");
}

#[test]
fn login_user_normalization_keeps_backend_updated_at() {
    let login_user = LoginUser {
        id: "u-1".to_owned(),
        role: UserRole::User,
        email: "a@b.com".to_owned(),
        updated_at: Some("2025-01-01T00:00:00.000Z".to_owned()),
    };
    let user = login_user.into_user("2025-06-01T12:00:00.000Z");
    assert_eq!(user.updated_at, "2025-01-01T00:00:00.000Z");
}

// =============================================================
// Workout / Exercise defaults
// =============================================================

#[test]
fn workout_defaults_missing_collections() {
    let json = r#"{"id": "w-1", "date": "2025-04-20"}"#;
    let workout: Workout = serde_json::from_str(json).unwrap();
    assert!(workout.notes.is_empty());
    assert!(workout.exercises.is_empty());
    assert!(workout.created_at.is_none());
}

#[test]
fn exercise_defaults_active_to_true() {
    let json = r#"{"id": "e-1", "name": "Bench Press"}"#;
    let exercise: Exercise = serde_json::from_str(json).unwrap();
    assert!(exercise.active);
    assert!(!exercise.public);
}

#[test]
fn workout_exercise_parses_nested_exercise() {
    let json = r#"{
        "id": "we-1",
        "exercise": {"id": "e-1", "name": "Squat", "muscleGroups": "legs"},
        "sets": "[{\"weight\":135.0,\"reps\":5}]",
        "position": 2
    }"#;
    let we: WorkoutExercise = serde_json::from_str(json).unwrap();
    assert_eq!(we.exercise.name, "Squat");
    assert_eq!(we.position, 2);
    assert_eq!(parse_sets(&we.sets), vec![SetEntry { weight: 135.0, reps: 5 }]);
}

// =============================================================
// Sets codec
// =============================================================

#[test]
fn parse_sets_decodes_entries() {
    let sets = parse_sets(r#"[{"weight": 95.0, "reps": 8}, {"weight": 100.0, "reps": 6}]"#);
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[1].reps, 6);
}

#[test]
fn parse_sets_blank_is_empty() {
    assert!(parse_sets("").is_empty());
    assert!(parse_sets("   ").is_empty());
}

#[test]
fn parse_sets_malformed_is_empty() {
    assert!(parse_sets("not json").is_empty());
    assert!(parse_sets(r#"{"weight": 1}"#).is_empty());
}

#[test]
fn encode_sets_round_trips() {
    let sets = vec![SetEntry { weight: 45.0, reps: 12 }];
    assert_eq!(parse_sets(&encode_sets(&sets)), sets);
}

#[test]
fn encode_sets_empty_is_json_array() {
    assert_eq!(encode_sets(&[]), "[]");
}
