use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::car::{Car, CarDriver, CarWithManufacturer, NewCar};
use crate::db::models::driver::Driver;
use crate::db::models::manufacturer::Manufacturer;

pub struct CarRepo;

impl CarRepo {
    pub fn insert(conn: &mut PgConnection, new_car: &NewCar) -> Result<Car, diesel::result::Error> {
        diesel::insert_into(crate::schema::cars::table)
            .values(new_car)
            .returning(Car::as_returning())
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        car_id: Uuid,
    ) -> Result<Option<Car>, diesel::result::Error> {
        use crate::schema::cars::dsl::*;
        cars.filter(id.eq(car_id))
            .select(Car::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_with_manufacturer(
        conn: &mut PgConnection,
        car_id: Uuid,
    ) -> Result<Option<CarWithManufacturer>, diesel::result::Error> {
        use crate::schema::{cars, manufacturers};
        let row = cars::table
            .inner_join(manufacturers::table)
            .filter(cars::id.eq(car_id))
            .select((Car::as_select(), Manufacturer::as_select()))
            .first::<(Car, Manufacturer)>(conn)
            .optional()?;
        Ok(row.map(CarWithManufacturer::from))
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, diesel::result::Error> {
        use crate::schema::cars::dsl::*;
        cars.count().get_result(conn)
    }

    pub fn count_matching(
        conn: &mut PgConnection,
        pattern: Option<&str>,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::cars::dsl::*;
        let mut query = cars.into_boxed();
        if let Some(p) = pattern {
            query = query.filter(model.ilike(p));
        }
        query.count().get_result(conn)
    }

    pub fn list_matching(
        conn: &mut PgConnection,
        pattern: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CarWithManufacturer>, diesel::result::Error> {
        use crate::schema::{cars, manufacturers};
        let mut query = cars::table
            .inner_join(manufacturers::table)
            .select((Car::as_select(), Manufacturer::as_select()))
            .into_boxed();
        if let Some(p) = pattern {
            query = query.filter(cars::model.ilike(p));
        }
        let rows = query
            .order((cars::model.asc(), cars::id.asc()))
            .offset(offset)
            .limit(limit)
            .load::<(Car, Manufacturer)>(conn)?;
        Ok(rows.into_iter().map(CarWithManufacturer::from).collect())
    }

    pub fn list_drivers(
        conn: &mut PgConnection,
        car: &Car,
    ) -> Result<Vec<Driver>, diesel::result::Error> {
        use crate::schema::drivers;
        CarDriver::belonging_to(car)
            .inner_join(drivers::table)
            .order(drivers::username.asc())
            .select(Driver::as_select())
            .load(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        car_id: Uuid,
        changes: &NewCar,
    ) -> Result<Car, diesel::result::Error> {
        use crate::schema::cars::dsl::*;
        diesel::update(cars.filter(id.eq(car_id)))
            .set(changes)
            .returning(Car::as_returning())
            .get_result(conn)
    }

    /// Replaces the car's driver set with `driver_ids`.
    pub fn set_drivers(
        conn: &mut PgConnection,
        car_id_val: Uuid,
        driver_ids: &[Uuid],
    ) -> Result<(), diesel::result::Error> {
        use crate::schema::cars_drivers::dsl::*;
        diesel::delete(cars_drivers.filter(car_id.eq(car_id_val))).execute(conn)?;
        let rows: Vec<CarDriver> = driver_ids
            .iter()
            .map(|d| CarDriver {
                car_id: car_id_val,
                driver_id: *d,
            })
            .collect();
        if !rows.is_empty() {
            diesel::insert_into(cars_drivers)
                .values(&rows)
                .on_conflict_do_nothing()
                .execute(conn)?;
        }
        Ok(())
    }

    pub fn is_assigned(
        conn: &mut PgConnection,
        car_id_val: Uuid,
        driver_id_val: Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::cars_drivers::dsl::*;
        diesel::select(diesel::dsl::exists(
            cars_drivers
                .filter(car_id.eq(car_id_val))
                .filter(driver_id.eq(driver_id_val)),
        ))
        .get_result(conn)
    }

    pub fn assign_driver(
        conn: &mut PgConnection,
        car_id_val: Uuid,
        driver_id_val: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::cars_drivers::dsl::*;
        diesel::insert_into(cars_drivers)
            .values(&CarDriver {
                car_id: car_id_val,
                driver_id: driver_id_val,
            })
            .on_conflict_do_nothing()
            .execute(conn)
    }

    pub fn unassign_driver(
        conn: &mut PgConnection,
        car_id_val: Uuid,
        driver_id_val: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::cars_drivers::dsl::*;
        diesel::delete(
            cars_drivers
                .filter(car_id.eq(car_id_val))
                .filter(driver_id.eq(driver_id_val)),
        )
        .execute(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        car_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::cars::dsl::*;
        diesel::delete(cars.filter(id.eq(car_id))).execute(conn)
    }
}
