use super::*;

#[test]
fn create_exercise_failed_message_formats_status() {
    assert_eq!(create_exercise_failed_message(403), "create exercise failed: 403");
}
