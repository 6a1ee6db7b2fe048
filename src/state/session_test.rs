use super::*;
use crate::net::types::LoginUser;

// =============================================================
// Helpers
// =============================================================

const T0: f64 = 1_700_000_000_000.0;

fn make_user(id: &str, role: UserRole, email: &str) -> User {
    User {
        id: id.to_owned(),
        role,
        email: email.to_owned(),
        updated_at: "2025-01-01T00:00:00.000Z".to_owned(),
    }
}

fn payload_with(user: Option<LoginUser>) -> LoginPayload {
    LoginPayload { user }
}

fn login_user(id: &str, role: UserRole, updated_at: Option<&str>) -> LoginUser {
    LoginUser {
        id: id.to_owned(),
        role,
        email: format!("{id}@b.com"),
        updated_at: updated_at.map(str::to_owned),
    }
}

// =============================================================
// Set / query / clear
// =============================================================

#[test]
fn fresh_session_is_logged_out() {
    let session = Session::default();
    assert!(!session.is_logged_in_at(T0));
    assert!(session.user_at(T0).is_none());
    assert!(!session.is_admin_at(T0));
}

#[test]
fn set_user_makes_queries_answer_true() {
    let mut session = Session::default();
    let user = make_user("1", UserRole::User, "a@b.com");
    session.set_user_at(user.clone(), T0);
    assert!(session.is_logged_in_at(T0));
    assert_eq!(session.user_at(T0), Some(user));
    assert!(!session.is_admin_at(T0));
}

#[test]
fn set_user_returns_record_with_ttl_expiry() {
    let mut session = Session::default();
    let record = session.set_user_at(make_user("1", UserRole::User, "a@b.com"), T0);
    assert!((record.expires_at - (T0 + SESSION_TTL_MS)).abs() < f64::EPSILON);
}

#[test]
fn admin_flag_follows_current_user_role() {
    let mut session = Session::default();
    session.set_user_at(make_user("3", UserRole::Admin, "admin@b.com"), T0);
    assert!(session.is_admin_at(T0));
    // A later non-admin login overwrites the prior session wholesale.
    session.set_user_at(make_user("2", UserRole::User, "b@b.com"), T0);
    assert!(!session.is_admin_at(T0));
}

#[test]
fn clear_resets_all_queries() {
    let mut session = Session::default();
    session.set_user_at(make_user("3", UserRole::Admin, "admin@b.com"), T0);
    session.clear();
    assert!(!session.is_logged_in_at(T0));
    assert!(session.user_at(T0).is_none());
    assert!(!session.is_admin_at(T0));
}

#[test]
fn clear_is_idempotent() {
    let mut session = Session::default();
    session.clear();
    session.clear();
    assert!(!session.is_logged_in_at(T0));
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn queries_flip_false_once_ttl_passes() {
    let mut session = Session::default();
    session.set_user_at(make_user("1", UserRole::Admin, "a@b.com"), T0);

    // One minute before expiry the session is still live.
    let just_before = T0 + SESSION_TTL_MS - 60_000.0;
    assert!(session.is_logged_in_at(just_before));
    assert!(session.is_admin_at(just_before));

    // One millisecond past expiry it is gone.
    let just_after = T0 + SESSION_TTL_MS + 1.0;
    assert!(!session.is_logged_in_at(just_after));
    assert!(session.user_at(just_after).is_none());
    assert!(!session.is_admin_at(just_after));
}

#[test]
fn expiry_boundary_is_exclusive() {
    let record = SessionRecord {
        user: make_user("1", UserRole::User, "a@b.com"),
        expires_at: T0,
    };
    assert!(!record.is_expired(T0 - 1.0));
    assert!(record.is_expired(T0));
    assert!(record.is_expired(T0 + 1.0));
}

#[test]
fn expire_if_due_drops_record_once() {
    let mut session = Session::default();
    session.set_user_at(make_user("1", UserRole::User, "a@b.com"), T0);
    let later = T0 + SESSION_TTL_MS + 1.0;
    assert!(session.expire_if_due(later));
    // Already cleared; the second call has nothing to drop.
    assert!(!session.expire_if_due(later));
}

#[test]
fn expire_if_due_keeps_live_record() {
    let mut session = Session::default();
    session.set_user_at(make_user("1", UserRole::User, "a@b.com"), T0);
    assert!(!session.expire_if_due(T0 + 1.0));
    assert!(session.is_logged_in_at(T0 + 1.0));
}

// =============================================================
// Restoration
// =============================================================

#[test]
fn restore_from_nothing_is_logged_out() {
    let (session, outcome) = Session::restore_from(None, T0);
    assert_eq!(outcome, RestoreOutcome::Absent);
    assert!(!session.is_logged_in_at(T0));
}

#[test]
fn restore_from_live_record_adopts_it() {
    let user = make_user("1", UserRole::User, "a@b.com");
    let record = SessionRecord {
        user: user.clone(),
        expires_at: T0 + 1_000.0,
    };
    let (session, outcome) = Session::restore_from(Some(record), T0);
    assert_eq!(outcome, RestoreOutcome::Restored);
    assert_eq!(session.user_at(T0), Some(user));
}

#[test]
fn restore_from_expired_record_is_logged_out() {
    let record = SessionRecord {
        user: make_user("1", UserRole::User, "a@b.com"),
        expires_at: T0 - 1.0,
    };
    let (session, outcome) = Session::restore_from(Some(record), T0);
    assert_eq!(outcome, RestoreOutcome::Expired);
    assert!(!session.is_logged_in_at(T0));
}

#[test]
fn parse_record_accepts_wire_shape() {
    let raw = r#"{
        "user": {"id": "1", "role": "USER", "email": "a@b.com", "updatedAt": "2025-01-01T00:00:00.000Z"},
        "expiresAt": 1700000000000.0
    }"#;
    let record = parse_record(raw).unwrap();
    assert_eq!(record.user.email, "a@b.com");
    assert!((record.expires_at - T0).abs() < f64::EPSILON);
}

#[test]
fn parse_record_rejects_corruption() {
    assert!(parse_record("").is_none());
    assert!(parse_record("not json").is_none());
    assert!(parse_record(r#"{"user": 42, "expiresAt": "soon"}"#).is_none());
}

#[test]
fn record_serializes_with_camel_case_expiry_key() {
    let record = SessionRecord {
        user: make_user("1", UserRole::User, "a@b.com"),
        expires_at: T0,
    };
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"expiresAt\""));
    assert_eq!(parse_record(&json), Some(record));
}

// =============================================================
// Login payload adoption
// =============================================================

#[test]
fn adopt_payload_with_user_logs_in() {
    let mut session = Session::default();
    let adopted = session
        .adopt_login_payload(
            payload_with(Some(login_user("1", UserRole::User, Some("2025-01-01T00:00:00.000Z")))),
            T0,
            "2025-06-01T12:00:00.000Z",
        )
        .unwrap();
    assert_eq!(adopted.updated_at, "2025-01-01T00:00:00.000Z");
    assert!(session.is_logged_in_at(T0));
    assert_eq!(session.user_at(T0), Some(adopted));
}

#[test]
fn adopt_payload_fills_missing_updated_at() {
    let mut session = Session::default();
    let adopted = session
        .adopt_login_payload(
            payload_with(Some(login_user("1", UserRole::User, None))),
            T0,
            "2025-06-01T12:00:00.000Z",
        )
        .unwrap();
    assert_eq!(adopted.updated_at, "2025-06-01T12:00:00.000Z");
}

#[test]
fn adopt_payload_without_user_is_an_error_and_mutates_nothing() {
    let mut session = Session::default();
    let err = session
        .adopt_login_payload(payload_with(None), T0, "2025-06-01T12:00:00.000Z")
        .unwrap_err();
    assert_eq!(err, "login failed: no user in response");
    assert!(!session.is_logged_in_at(T0));
}

#[test]
fn adopt_payload_without_user_keeps_existing_session() {
    let mut session = Session::default();
    let existing = make_user("1", UserRole::Admin, "admin@b.com");
    session.set_user_at(existing.clone(), T0);
    let _ = session.adopt_login_payload(payload_with(None), T0, "2025-06-01T12:00:00.000Z");
    assert_eq!(session.user_at(T0), Some(existing));
}

#[test]
fn adopt_payload_replaces_prior_session_wholesale() {
    let mut session = Session::default();
    session.set_user_at(make_user("3", UserRole::Admin, "admin@b.com"), T0);
    let adopted = session
        .adopt_login_payload(
            payload_with(Some(login_user("2", UserRole::User, None))),
            T0,
            "2025-06-01T12:00:00.000Z",
        )
        .unwrap();
    assert_eq!(adopted.id, "2");
    assert!(!session.is_admin_at(T0));
}

// =============================================================
// Wall-clock wrappers (native storage is a no-op, clock is epoch zero)
// =============================================================

#[test]
fn wrapper_set_then_query_round_trip() {
    let mut session = Session::default();
    let user = make_user("1", UserRole::User, "a@b.com");
    session.set_user(user.clone());
    assert!(session.is_logged_in());
    assert_eq!(session.user(), Some(user));
    assert!(!session.is_admin());
}

#[test]
fn wrapper_clear_user_logs_out_regardless_of_prior_state() {
    let mut session = Session::default();
    session.set_user(make_user("3", UserRole::Admin, "admin@b.com"));
    session.clear_user();
    assert!(!session.is_logged_in());
    assert!(session.user().is_none());
    session.clear_user();
    assert!(!session.is_logged_in());
}

#[test]
fn wrapper_login_with_missing_user_leaves_logged_out() {
    let mut session = Session::default();
    let err = session.login_with(payload_with(None)).unwrap_err();
    assert_eq!(err, "login failed: no user in response");
    assert!(!session.is_logged_in());
}

#[test]
fn wrapper_login_with_user_logs_in() {
    let mut session = Session::default();
    let adopted = session
        .login_with(payload_with(Some(login_user("1", UserRole::User, None))))
        .unwrap();
    assert_eq!(adopted.id, "1");
    assert!(session.is_logged_in());
}

#[test]
fn restore_without_storage_is_logged_out() {
    let mut session = Session::restore();
    assert!(!session.is_logged_in());
}
