use super::*;

// =============================================================
// Pagination math
// =============================================================

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 15), 0);
    assert_eq!(total_pages(15, 15), 1);
    assert_eq!(total_pages(16, 15), 2);
    assert_eq!(total_pages(45, 15), 3);
}

#[test]
fn total_pages_zero_limit_is_zero() {
    assert_eq!(total_pages(100, 0), 0);
}

// =============================================================
// Form parsing
// =============================================================

#[test]
fn parse_amount_accepts_positive_decimals() {
    assert_eq!(parse_amount("12.50"), Some(12.5));
    assert_eq!(parse_amount(" 3 "), Some(3.0));
}

#[test]
fn parse_amount_rejects_zero_negative_and_junk() {
    assert_eq!(parse_amount("0"), None);
    assert_eq!(parse_amount("-5"), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("inf"), None);
}

#[test]
fn optional_field_blank_reads_as_absent() {
    assert_eq!(optional_field("   "), None);
    assert_eq!(optional_field(" note "), Some("note".to_owned()));
}

#[test]
fn flagged_filter_tri_state() {
    assert_eq!(flagged_filter("true"), Some(true));
    assert_eq!(flagged_filter("false"), Some(false));
    assert_eq!(flagged_filter(""), None);
    assert_eq!(flagged_filter("anything"), None);
}

// =============================================================
// Payload building
// =============================================================

#[test]
fn create_payload_blank_category_defers_to_auto_detect() {
    let payload = build_create_payload("20", "Lunch", "", "").unwrap();
    assert_eq!(payload.amount, 20.0);
    assert_eq!(payload.description, "Lunch");
    assert!(payload.category.is_none());
    assert!(payload.note.is_none());
}

#[test]
fn create_payload_keeps_explicit_category_and_note() {
    let payload = build_create_payload("8.25", "Bus ticket", "Transportation", "work trip").unwrap();
    assert_eq!(payload.category.as_deref(), Some("Transportation"));
    assert_eq!(payload.note.as_deref(), Some("work trip"));
}

#[test]
fn create_payload_rejects_invalid_amount_or_description() {
    assert_eq!(build_create_payload("nope", "Lunch", "", ""), Err("Enter an amount above zero."));
    assert_eq!(build_create_payload("10", "  ", "", ""), Err("Enter a description."));
}

#[test]
fn update_payload_always_carries_amount_and_description() {
    let payload = build_update_payload("42", "Rent", "Housing", "").unwrap();
    assert_eq!(payload.amount, Some(42.0));
    assert_eq!(payload.description.as_deref(), Some("Rent"));
    assert_eq!(payload.category.as_deref(), Some("Housing"));
    assert!(payload.note.is_none());
}
