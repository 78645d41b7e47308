use super::*;

#[test]
fn profile_input_trims_and_builds_update() {
    let update = validate_profile_input(" Jane ", " jane@example.com ").unwrap();
    assert_eq!(update.name.as_deref(), Some("Jane"));
    assert_eq!(update.email.as_deref(), Some("jane@example.com"));
    assert!(update.password.is_none());
}

#[test]
fn profile_input_requires_both_fields() {
    assert_eq!(validate_profile_input("", "jane@example.com"), Err("Name and email are required."));
    assert_eq!(validate_profile_input("Jane", "   "), Err("Name and email are required."));
}

#[test]
fn new_password_enforces_minimum_length() {
    assert_eq!(validate_new_password("short"), Err("Password must be at least 8 characters"));
    let update = validate_new_password("12345678").unwrap();
    assert_eq!(update.password.as_deref(), Some("12345678"));
    assert!(update.name.is_none());
    assert!(update.email.is_none());
}
