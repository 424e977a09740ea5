use bcrypt::verify;
use diesel::prelude::*;
use serde::Deserialize;
use validator::Validate;

use crate::{
    db::models::driver::Driver,
    db::repositories::DriverRepo,
    error::AppError,
};

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub password: String,
}

const INVALID_CREDENTIALS: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

pub struct AccountsService;

impl AccountsService {
    /// Checks the credentials of an active driver. Blocking: runs bcrypt.
    pub fn authenticate(conn: &mut PgConnection, form: &LoginForm) -> Result<Driver, AppError> {
        let driver = match DriverRepo::find_active_by_username(conn, &form.username)? {
            Some(driver) => driver,
            None => {
                tracing::warn!(username = %form.username, "Login failed - unknown driver");
                return Err(AppError::auth(INVALID_CREDENTIALS));
            }
        };

        if !verify(form.password.as_bytes(), &driver.password_hash)? {
            tracing::warn!(username = %form.username, "Login failed - invalid password");
            return Err(AppError::auth(INVALID_CREDENTIALS));
        }

        Ok(driver)
    }
}
