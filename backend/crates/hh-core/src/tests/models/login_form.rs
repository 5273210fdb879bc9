use crate::{CoreError, LoginForm, is_valid_email};

#[test]
fn given_demo_credentials_when_validate_then_ok() {
    let form = LoginForm::new("admin@helpinghands.org", "admin123");

    assert!(form.validate().is_ok());
}

#[test]
fn given_mixed_case_email_when_checked_then_accepted() {
    assert!(is_valid_email("Sarah.Donor+gifts@HelpingHands.ORG"));
}

#[test]
fn given_malformed_emails_when_checked_then_rejected() {
    for email in [
        "not-an-email",
        "a@b.",
        "a b@c.de",
        "user@localhost",
        "@helpinghands.org",
        "x@y.z",
    ] {
        assert!(!is_valid_email(email), "{email} should be rejected");
    }
}

#[test]
fn given_malformed_email_when_validate_then_invalid_email_message() {
    let result = LoginForm::new("not-an-email", "admin123").validate();

    let Err(CoreError::Validation { message, .. }) = result else {
        panic!("expected a validation error");
    };
    assert_eq!(message, "Invalid email address");
}

#[test]
fn given_short_password_when_validate_then_min_length_message() {
    let result = LoginForm::new("admin@helpinghands.org", "abc12").validate();

    let Err(CoreError::Validation { message, .. }) = result else {
        panic!("expected a validation error");
    };
    assert_eq!(message, "Password must be at least 6 characters");
}

#[test]
fn given_empty_fields_when_validate_then_required_messages() {
    let missing_email = LoginForm::new("", "admin123").validate();
    let missing_password = LoginForm::new("admin@helpinghands.org", "").validate();

    assert!(matches!(
        missing_email,
        Err(CoreError::Validation { ref message, .. }) if message == "Email is required"
    ));
    assert!(matches!(
        missing_password,
        Err(CoreError::Validation { ref message, .. }) if message == "Password is required"
    ));
}
