pub mod car;
pub mod driver;
pub mod manufacturer;
pub mod search;

use axum::{
    async_trait,
    extract::FromRequest,
    http::Request,
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::{db::models::api::ErrorDetail, error::AppError};

/// JSON extractor that runs the payload's `Validate` impl before the handler.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid JSON format: {}", e)))?;

        validate_form(&value)?;
        Ok(ValidatedJson(value))
    }
}

/// Runs a form's validation rules, reporting every field error at once.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), AppError> {
    form.validate().map_err(|errors| AppError::Form {
        errors: form_error_details(&errors),
    })
}

/// Flattens `validator` errors into field-level details, ordered by field.
pub fn form_error_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    let mut details: Vec<ErrorDetail> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| ErrorDetail {
                field: Some(field.to_string()),
                code: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field: {}", field)),
            })
        })
        .collect();
    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}

/// Shared field rules
pub mod rules {
    use std::borrow::Cow;
    use validator::ValidationError;

    pub(crate) fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
        let mut err = ValidationError::new(code);
        err.message = Some(message.into());
        err
    }

    /// Letters, digits and `@ . + - _` only.
    pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
        if username.is_empty() {
            return Err(error("required", "This field is required."));
        }
        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || "@.+-_".contains(c))
        {
            return Err(error(
                "invalid_username_format",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            ));
        }
        Ok(())
    }

    pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
        if password.chars().count() < 8 {
            return Err(error(
                "password_too_short",
                "This password is too short. It must contain at least 8 characters.",
            ));
        }
        if password.chars().all(|c| c.is_ascii_digit()) {
            return Err(error(
                "password_entirely_numeric",
                "This password is entirely numeric.",
            ));
        }
        Ok(())
    }

}
