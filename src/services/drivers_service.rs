use bcrypt::hash;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::api::error_codes,
    db::models::driver::{Driver, DriverDetail, NewDriver},
    db::repositories::DriverRepo,
    error::AppError,
    utils::pagination::{ListContext, PAGINATE_BY, Paginator},
    validation::driver::{DriverCreationForm, DriverLicenseUpdateForm},
    validation::search::{DriverSearchForm, SearchForm},
};

pub struct DriversService;

impl DriversService {
    pub fn list(
        conn: &mut PgConnection,
        search_form: DriverSearchForm,
        page: Option<&str>,
    ) -> Result<ListContext<Driver, DriverSearchForm>, AppError> {
        let pattern = search_form.contains_pattern();
        let count = DriverRepo::count_matching(conn, pattern.as_deref())?;
        let page = Paginator::new(count, PAGINATE_BY).page(page)?;
        let object_list =
            DriverRepo::list_matching(conn, pattern.as_deref(), page.offset(), page.limit())?;

        Ok(ListContext {
            context_object_name: "driver_list",
            object_list,
            page,
            search_form,
        })
    }

    /// Creates a driver from an already validated form. Blocking: runs bcrypt.
    pub fn create(
        conn: &mut PgConnection,
        form: &DriverCreationForm,
        bcrypt_cost: u32,
    ) -> Result<Driver, AppError> {
        if DriverRepo::exists_by_username(conn, &form.username)? {
            return Err(AppError::conflict_with_code(
                "A user with that username already exists.",
                Some("username".to_string()),
                error_codes::DRIVER_USERNAME_EXISTS,
            ));
        }

        Self::ensure_license_available(conn, &form.license_number, None)?;

        let password_hash = hash(form.password1.as_bytes(), bcrypt_cost)?;
        let new_driver = NewDriver {
            username: form.username.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            password_hash,
            license_number: form.license_number.clone(),
        };

        let driver = DriverRepo::insert(conn, &new_driver)?;
        tracing::info!(driver_id = %driver.id, username = %driver.username, "Driver created");
        Ok(driver)
    }

    pub fn detail(conn: &mut PgConnection, driver_id: Uuid) -> Result<DriverDetail, AppError> {
        let driver =
            DriverRepo::find_by_id(conn, driver_id)?.ok_or_else(|| AppError::not_found("driver"))?;
        let cars = DriverRepo::list_cars(conn, driver.id)?;
        Ok(DriverDetail { driver, cars })
    }

    pub fn update_license(
        conn: &mut PgConnection,
        driver_id: Uuid,
        form: &DriverLicenseUpdateForm,
    ) -> Result<Driver, AppError> {
        if DriverRepo::find_by_id(conn, driver_id)?.is_none() {
            return Err(AppError::not_found("driver"));
        }
        Self::ensure_license_available(conn, &form.license_number, Some(driver_id))?;

        let driver = DriverRepo::update_license_number(conn, driver_id, &form.license_number)?;
        Ok(driver)
    }

    pub fn delete(conn: &mut PgConnection, driver_id: Uuid) -> Result<(), AppError> {
        if DriverRepo::delete_by_id(conn, driver_id)? == 0 {
            return Err(AppError::not_found("driver"));
        }
        tracing::info!(driver_id = %driver_id, "Driver deleted");
        Ok(())
    }

    fn ensure_license_available(
        conn: &mut PgConnection,
        license_number: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        if DriverRepo::exists_by_license_number(conn, license_number, exclude_id)? {
            return Err(AppError::conflict_with_code(
                "Driver with this License number already exists.",
                Some("license_number".to_string()),
                error_codes::DRIVER_LICENSE_EXISTS,
            ));
        }
        Ok(())
    }
}
