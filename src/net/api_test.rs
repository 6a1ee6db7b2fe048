use super::*;
use crate::net::endpoint;

#[test]
fn endpoint_joins_path_onto_base() {
    assert_eq!(endpoint("/users/login"), format!("{}/users/login", crate::net::API_BASE));
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn signup_failed_message_formats_status() {
    assert_eq!(signup_failed_message(409), "signup failed: 409");
}

#[test]
fn verify_email_failed_message_formats_status() {
    assert_eq!(verify_email_failed_message(400), "verify email failed: 400");
}

#[test]
fn backend_error_reason_extracts_error_field() {
    assert_eq!(
        backend_error_reason(r#"{"error": "Email already in use."}"#),
        Some("Email already in use.".to_owned())
    );
}

#[test]
fn backend_error_reason_none_for_other_bodies() {
    assert_eq!(backend_error_reason(r#"{"message": "ok"}"#), None);
    assert_eq!(backend_error_reason("<html>502</html>"), None);
}
