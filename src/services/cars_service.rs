use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::api::error_codes,
    db::models::car::{CarDetail, CarWithManufacturer, NewCar},
    db::repositories::{CarRepo, DriverRepo, ManufacturerRepo},
    error::AppError,
    services::context::RequestContext,
    utils::pagination::{ListContext, PAGINATE_BY, Paginator},
    validation::car::CarForm,
    validation::search::{CarSearchForm, SearchForm},
};

pub struct CarsService;

impl CarsService {
    pub fn list(
        conn: &mut PgConnection,
        search_form: CarSearchForm,
        page: Option<&str>,
    ) -> Result<ListContext<CarWithManufacturer, CarSearchForm>, AppError> {
        let pattern = search_form.contains_pattern();
        let count = CarRepo::count_matching(conn, pattern.as_deref())?;
        let page = Paginator::new(count, PAGINATE_BY).page(page)?;
        let object_list =
            CarRepo::list_matching(conn, pattern.as_deref(), page.offset(), page.limit())?;

        Ok(ListContext {
            context_object_name: "car_list",
            object_list,
            page,
            search_form,
        })
    }

    pub fn create(conn: &mut PgConnection, form: &CarForm) -> Result<CarDetail, AppError> {
        conn.transaction(|conn| {
            let (new_car, drivers) = Self::resolve_form(conn, form)?;
            let car = CarRepo::insert(conn, &new_car)?;
            CarRepo::set_drivers(conn, car.id, &drivers)?;
            tracing::info!(car_id = %car.id, model = %car.model, "Car created");
            Self::detail(conn, car.id)
        })
    }

    pub fn detail(conn: &mut PgConnection, car_id: Uuid) -> Result<CarDetail, AppError> {
        let CarWithManufacturer { car, manufacturer } =
            CarRepo::find_with_manufacturer(conn, car_id)?
                .ok_or_else(|| AppError::not_found("car"))?;
        let drivers = CarRepo::list_drivers(conn, &car)?;
        Ok(CarDetail {
            car,
            manufacturer,
            drivers,
        })
    }

    pub fn update(
        conn: &mut PgConnection,
        car_id: Uuid,
        form: &CarForm,
    ) -> Result<CarDetail, AppError> {
        conn.transaction(|conn| {
            if CarRepo::find_by_id(conn, car_id)?.is_none() {
                return Err(AppError::not_found("car"));
            }
            let (changes, drivers) = Self::resolve_form(conn, form)?;
            CarRepo::update(conn, car_id, &changes)?;
            CarRepo::set_drivers(conn, car_id, &drivers)?;
            Self::detail(conn, car_id)
        })
    }

    pub fn delete(conn: &mut PgConnection, car_id: Uuid) -> Result<(), AppError> {
        if CarRepo::delete_by_id(conn, car_id)? == 0 {
            return Err(AppError::not_found("car"));
        }
        Ok(())
    }

    /// Adds the current driver to the car, or removes them if already assigned.
    pub fn toggle_assign(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        car_id: Uuid,
    ) -> Result<CarDetail, AppError> {
        conn.transaction(|conn| {
            if CarRepo::find_by_id(conn, car_id)?.is_none() {
                return Err(AppError::not_found("car"));
            }

            if CarRepo::is_assigned(conn, car_id, ctx.driver_id)? {
                CarRepo::unassign_driver(conn, car_id, ctx.driver_id)?;
                tracing::info!(
                    car_id = %car_id,
                    driver_id = %ctx.driver_id,
                    username = %ctx.username,
                    request_id = ctx.request_id.as_deref(),
                    "Driver removed from car"
                );
            } else {
                CarRepo::assign_driver(conn, car_id, ctx.driver_id)?;
                tracing::info!(
                    car_id = %car_id,
                    driver_id = %ctx.driver_id,
                    username = %ctx.username,
                    request_id = ctx.request_id.as_deref(),
                    "Driver assigned to car"
                );
            }

            Self::detail(conn, car_id)
        })
    }

    /// Checks the form's references against the store.
    fn resolve_form(
        conn: &mut PgConnection,
        form: &CarForm,
    ) -> Result<(NewCar, Vec<Uuid>), AppError> {
        let manufacturer_id = form
            .manufacturer
            .ok_or_else(|| AppError::field("manufacturer", "required", "This field is required."))?;

        if ManufacturerRepo::find_by_id(conn, manufacturer_id)?.is_none() {
            return Err(AppError::field(
                "manufacturer",
                error_codes::INVALID_CHOICE,
                "Select a valid choice. That choice is not one of the available choices.",
            ));
        }

        let drivers = form.unique_drivers();
        if DriverRepo::count_existing(conn, &drivers)? != drivers.len() as i64 {
            return Err(AppError::field(
                "drivers",
                error_codes::INVALID_CHOICE,
                "Select a valid choice. One of the selected drivers is not available.",
            ));
        }

        Ok((
            NewCar {
                model: form.model.clone(),
                manufacturer_id,
            },
            drivers,
        ))
    }
}
