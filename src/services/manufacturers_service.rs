use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::api::error_codes,
    db::models::manufacturer::{Manufacturer, NewManufacturer},
    db::repositories::ManufacturerRepo,
    error::AppError,
    utils::pagination::{ListContext, PAGINATE_BY, Paginator},
    validation::manufacturer::ManufacturerForm,
    validation::search::{ManufacturerSearchForm, SearchForm},
};

pub struct ManufacturersService;

impl ManufacturersService {
    pub fn list(
        conn: &mut PgConnection,
        search_form: ManufacturerSearchForm,
        page: Option<&str>,
    ) -> Result<ListContext<Manufacturer, ManufacturerSearchForm>, AppError> {
        let pattern = search_form.contains_pattern();
        let count = ManufacturerRepo::count_matching(conn, pattern.as_deref())?;
        let page = Paginator::new(count, PAGINATE_BY).page(page)?;
        let object_list =
            ManufacturerRepo::list_matching(conn, pattern.as_deref(), page.offset(), page.limit())?;

        Ok(ListContext {
            context_object_name: "manufacturer_list",
            object_list,
            page,
            search_form,
        })
    }

    pub fn create(
        conn: &mut PgConnection,
        form: &ManufacturerForm,
    ) -> Result<Manufacturer, AppError> {
        Self::ensure_name_available(conn, &form.name, None)?;
        let manufacturer = ManufacturerRepo::insert(conn, &NewManufacturer::from(form))?;
        Ok(manufacturer)
    }

    pub fn update(
        conn: &mut PgConnection,
        manufacturer_id: Uuid,
        form: &ManufacturerForm,
    ) -> Result<Manufacturer, AppError> {
        if ManufacturerRepo::find_by_id(conn, manufacturer_id)?.is_none() {
            return Err(AppError::not_found("manufacturer"));
        }
        Self::ensure_name_available(conn, &form.name, Some(manufacturer_id))?;

        let manufacturer =
            ManufacturerRepo::update(conn, manufacturer_id, &NewManufacturer::from(form))?;
        Ok(manufacturer)
    }

    /// Deleting a manufacturer also deletes its cars.
    pub fn delete(conn: &mut PgConnection, manufacturer_id: Uuid) -> Result<(), AppError> {
        if ManufacturerRepo::delete_by_id(conn, manufacturer_id)? == 0 {
            return Err(AppError::not_found("manufacturer"));
        }
        Ok(())
    }

    fn ensure_name_available(
        conn: &mut PgConnection,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        if ManufacturerRepo::exists_by_name(conn, name, exclude_id)? {
            return Err(AppError::conflict_with_code(
                "Manufacturer with this Name already exists.",
                Some("name".to_string()),
                error_codes::MANUFACTURER_NAME_EXISTS,
            ));
        }
        Ok(())
    }
}
