// The standalone license-number check, as called by forms and other callers

use taxi_service::validation::driver::{LicenseNumberError, validate_license_number};

#[test]
fn valid_license_number_is_returned_unchanged() {
    assert_eq!(validate_license_number("ABC12345"), Ok("ABC12345"));
}

#[test]
fn invalid_license_number_length() {
    assert!(validate_license_number("ABC1234").is_err());
}

#[test]
fn invalid_license_number_letters() {
    assert!(validate_license_number("abc12345").is_err());
}

#[test]
fn invalid_license_number_digits() {
    assert!(validate_license_number("ABC12XYZ").is_err());
}

#[test]
fn failures_name_the_broken_rule() {
    assert_eq!(validate_license_number("invalid"), Err(LicenseNumberError::Length));
    assert_eq!(validate_license_number("123ABC45"), Err(LicenseNumberError::Prefix));
    assert_eq!(validate_license_number("AbC12345"), Err(LicenseNumberError::Prefix));
    assert_eq!(validate_license_number("ABC1234X"), Err(LicenseNumberError::Suffix));
    assert_eq!(
        LicenseNumberError::Length.to_string(),
        "License number should consist of 8 characters"
    );
}
