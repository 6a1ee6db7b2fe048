use super::*;

#[test]
fn ymd_of_iso_takes_date_prefix() {
    assert_eq!(ymd_of_iso("2025-04-20T18:30:00.000Z"), "2025-04-20");
}

#[test]
fn ymd_of_iso_passes_short_input_through() {
    assert_eq!(ymd_of_iso("2025"), "2025");
    assert_eq!(ymd_of_iso(""), "");
}

#[test]
fn native_now_iso_is_a_full_timestamp() {
    assert_eq!(ymd_of_iso(&now_iso()).len(), 10);
}
