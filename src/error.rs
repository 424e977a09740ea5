use crate::db::models::api::{ApiResponse, ErrorDetail, error_codes};
use crate::utils::pagination::PageError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] diesel::result::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Form validation failed with {} errors", errors.len())]
    Form { errors: Vec<ErrorDetail> },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid page: {0}")]
    InvalidPage(#[from] PageError),

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        field: Option<String>,
        code: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, response) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Database error"),
                )
            }
            AppError::Pool(ref e) => {
                tracing::error!("Connection pool error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Connection error"),
                )
            }
            AppError::Auth { ref message } => (
                StatusCode::UNAUTHORIZED,
                ApiResponse::<()>::unauthorized(message),
            ),
            AppError::Validation { ref message } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::bad_request(message),
            ),
            AppError::Form { errors } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::validation_error(errors),
            ),
            AppError::NotFound { ref resource } => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::not_found(&format!("{} not found", resource)),
            ),
            AppError::InvalidPage(ref e) => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::not_found(&e.to_string()),
            ),
            AppError::Conflict {
                ref message,
                ref field,
                ref code,
            } => (
                StatusCode::CONFLICT,
                ApiResponse::<()>::conflict(message, field.clone(), code.as_deref().unwrap_or("")),
            ),
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Configuration error"),
                )
            }
            AppError::Jwt(ref e) => {
                tracing::error!("JWT error: {}", e);
                (
                    StatusCode::UNAUTHORIZED,
                    ApiResponse::<()>::unauthorized("Invalid token"),
                )
            }
            AppError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Password processing error"),
                )
            }
            AppError::Internal(ref message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error(message),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Unique constraints (PostgreSQL default names) and the form field each guards.
const UNIQUE_CONSTRAINTS: &[(&str, &str, &str, &str)] = &[
    (
        "drivers_username_key",
        "username",
        error_codes::DRIVER_USERNAME_EXISTS,
        "A user with that username already exists.",
    ),
    (
        "drivers_license_number_key",
        "license_number",
        error_codes::DRIVER_LICENSE_EXISTS,
        "Driver with this License number already exists.",
    ),
    (
        "manufacturers_name_key",
        "name",
        error_codes::MANUFACTURER_NAME_EXISTS,
        "Manufacturer with this Name already exists.",
    ),
];

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        // A concurrent insert can pass the exists-check and still hit the constraint
        if let Error::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) = err {
            let constraint = info.constraint_name();
            let message = info.message();
            let known = UNIQUE_CONSTRAINTS.iter().find(|(name, ..)| match constraint {
                Some(constraint) => constraint == *name,
                None => message.contains(name),
            });

            return match known {
                Some((_, field, code, message)) => {
                    AppError::conflict_with_code(*message, Some(field.to_string()), *code)
                }
                None => AppError::Conflict {
                    message: "Record already exists.".to_string(),
                    field: None,
                    code: None,
                },
            };
        }

        AppError::Database(err)
    }
}

impl AppError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// A single field-level form error.
    pub fn field(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self::Form {
            errors: vec![ErrorDetail {
                field: Some(field.to_string()),
                code: code.to_string(),
                message: message.into(),
            }],
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn conflict_with_code(
        message: impl Into<String>,
        field: Option<String>,
        code: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            message: message.into(),
            field,
            code: Some(code.into()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
