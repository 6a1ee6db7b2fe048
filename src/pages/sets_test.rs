use super::*;

// =============================================================
// Steppers
// =============================================================

#[test]
fn bump_weight_steps_by_delta() {
    assert!((bump_weight(45.0, WEIGHT_STEP) - 50.0).abs() < f64::EPSILON);
    assert!((bump_weight(45.0, -WEIGHT_STEP) - 40.0).abs() < f64::EPSILON);
}

#[test]
fn bump_weight_clamps_at_zero() {
    assert!(bump_weight(0.0, -WEIGHT_STEP).abs() < f64::EPSILON);
    assert!((bump_weight(2.5, -WEIGHT_STEP)).abs() < f64::EPSILON);
}

#[test]
fn bump_reps_steps_by_delta() {
    assert_eq!(bump_reps(5, 1), 6);
    assert_eq!(bump_reps(5, -1), 4);
}

#[test]
fn bump_reps_clamps_at_one() {
    assert_eq!(bump_reps(1, -1), 1);
    assert_eq!(bump_reps(0, -1), 1);
}

// =============================================================
// List edits
// =============================================================

#[test]
fn push_set_appends_entry() {
    let sets = vec![SetEntry { weight: 95.0, reps: 8 }];
    let next = push_set(&sets, SetEntry { weight: 100.0, reps: 6 });
    assert_eq!(next.len(), 2);
    assert_eq!(next[1].reps, 6);
    // The input list is untouched.
    assert_eq!(sets.len(), 1);
}

#[test]
fn remove_set_drops_only_the_indexed_entry() {
    let sets = vec![
        SetEntry { weight: 95.0, reps: 8 },
        SetEntry { weight: 100.0, reps: 6 },
        SetEntry { weight: 105.0, reps: 4 },
    ];
    let next = remove_set(&sets, 1);
    assert_eq!(next.len(), 2);
    assert!((next[0].weight - 95.0).abs() < f64::EPSILON);
    assert!((next[1].weight - 105.0).abs() < f64::EPSILON);
}

#[test]
fn remove_set_out_of_range_is_a_no_op() {
    let sets = vec![SetEntry { weight: 95.0, reps: 8 }];
    assert_eq!(remove_set(&sets, 5), sets);
}
