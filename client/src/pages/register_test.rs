use super::*;

#[test]
fn validate_register_input_trims_and_accepts() {
    assert_eq!(
        validate_register_input(" Jane ", " jane@example.com ", "longenough"),
        Ok(("Jane".to_owned(), "jane@example.com".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_name_and_email() {
    assert_eq!(
        validate_register_input("  ", "jane@example.com", "longenough"),
        Err("Enter your name and email.")
    );
    assert_eq!(
        validate_register_input("Jane", "", "longenough"),
        Err("Enter your name and email.")
    );
}

#[test]
fn validate_register_input_enforces_password_length() {
    assert_eq!(
        validate_register_input("Jane", "jane@example.com", "short"),
        Err("Password must be at least 8 characters.")
    );
    // Exactly at the boundary is accepted.
    assert!(validate_register_input("Jane", "jane@example.com", "12345678").is_ok());
}
