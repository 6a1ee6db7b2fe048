use super::*;

#[test]
fn validate_exercise_name_trims_whitespace() {
    assert_eq!(validate_exercise_name("  Bench Press  "), Ok("Bench Press".to_owned()));
}

#[test]
fn validate_exercise_name_requires_value() {
    assert_eq!(validate_exercise_name("   "), Err("Exercise name is required."));
    assert_eq!(validate_exercise_name(""), Err("Exercise name is required."));
}
