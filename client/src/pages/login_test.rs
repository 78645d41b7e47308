use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "pw"),
        Ok(("user@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter both email and password."));
}
