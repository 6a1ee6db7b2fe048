use super::*;

#[test]
fn signup_phase_starts_at_form() {
    assert_eq!(SignupPhase::default(), SignupPhase::Form);
}

#[test]
fn validate_signup_input_trims_email() {
    assert_eq!(
        validate_signup_input(" new@example.com ", "hunter2"),
        Ok(("new@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_signup_input_requires_both_fields() {
    assert_eq!(
        validate_signup_input("", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_signup_input("new@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_code_input_trims_and_requires_value() {
    assert_eq!(validate_code_input(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(
        validate_code_input("   "),
        Err("Enter the verification code from your email.")
    );
}
