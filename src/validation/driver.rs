use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::validation::rules::{error, validate_password_strength, validate_username_format};

pub const LICENSE_NUMBER_LENGTH: usize = 8;
const LICENSE_PREFIX_LENGTH: usize = 3;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseNumberError {
    #[error("License number should consist of 8 characters")]
    Length,
    #[error("First 3 characters should be uppercase letters")]
    Prefix,
    #[error("Last 5 characters should be digits")]
    Suffix,
}

impl LicenseNumberError {
    pub fn code(&self) -> &'static str {
        match self {
            LicenseNumberError::Length => "license_number_length",
            LicenseNumberError::Prefix => "license_number_prefix",
            LicenseNumberError::Suffix => "license_number_suffix",
        }
    }
}

/// Checks a license number: 3 uppercase ASCII letters followed by 5 ASCII
/// digits. Returns the candidate unchanged when it is well formed.
pub fn validate_license_number(candidate: &str) -> Result<&str, LicenseNumberError> {
    if candidate.chars().count() != LICENSE_NUMBER_LENGTH {
        return Err(LicenseNumberError::Length);
    }

    let mut chars = candidate.chars();
    if !chars
        .by_ref()
        .take(LICENSE_PREFIX_LENGTH)
        .all(|c| c.is_ascii_uppercase())
    {
        return Err(LicenseNumberError::Prefix);
    }
    if !chars.all(|c| c.is_ascii_digit()) {
        return Err(LicenseNumberError::Suffix);
    }

    Ok(candidate)
}

/// `validator` hook for the `license_number` field of driver forms.
pub fn license_number_rule(value: &str) -> Result<(), ValidationError> {
    validate_license_number(value)
        .map(|_| ())
        .map_err(|e| error(e.code(), e.to_string()))
}

fn passwords_present(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(error("required", "This field is required."));
    }
    Ok(())
}

fn optional_email(email: &str) -> Result<(), ValidationError> {
    if !email.is_empty() && !email.validate_email() {
        return Err(error("email", "Enter a valid email address."));
    }
    Ok(())
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct DriverCreationForm {
    #[serde(default)]
    #[validate(
        length(max = 150, message = "Ensure this value has at most 150 characters."),
        custom(function = "validate_username_format")
    )]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "validate_password_strength"))]
    pub password1: String,

    #[serde(default)]
    #[validate(
        custom(function = "passwords_present"),
        must_match(other = "password1", message = "The two password fields didn't match.")
    )]
    pub password2: String,

    #[serde(default)]
    #[validate(custom(function = "license_number_rule"))]
    pub license_number: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    pub last_name: String,

    #[serde(default)]
    #[validate(custom(function = "optional_email"))]
    pub email: String,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct DriverLicenseUpdateForm {
    #[serde(default)]
    #[validate(custom(function = "license_number_rule"))]
    pub license_number: String,
}
