use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::car::{Car, CarWithManufacturer};
use crate::db::models::driver::{Driver, NewDriver};
use crate::db::models::manufacturer::Manufacturer;

pub struct DriverRepo;

impl DriverRepo {
    pub fn exists_by_username(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        diesel::select(diesel::dsl::exists(drivers.filter(username.eq(name)))).get_result(conn)
    }

    pub fn exists_by_license_number(
        conn: &mut PgConnection,
        license: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        let mut query = drivers.filter(license_number.eq(license)).into_boxed();
        if let Some(excluded) = exclude_id {
            query = query.filter(id.ne(excluded));
        }
        diesel::select(diesel::dsl::exists(query)).get_result(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_driver: &NewDriver,
    ) -> Result<Driver, diesel::result::Error> {
        diesel::insert_into(crate::schema::drivers::table)
            .values(new_driver)
            .returning(Driver::as_returning())
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        driver_id: Uuid,
    ) -> Result<Option<Driver>, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        drivers
            .filter(id.eq(driver_id))
            .select(Driver::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_active_by_id(
        conn: &mut PgConnection,
        driver_id: Uuid,
    ) -> Result<Option<Driver>, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        drivers
            .filter(id.eq(driver_id))
            .filter(is_active.eq(true))
            .select(Driver::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_active_by_username(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<Driver>, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        drivers
            .filter(username.eq(name))
            .filter(is_active.eq(true))
            .select(Driver::as_select())
            .first(conn)
            .optional()
    }

    /// How many of `ids` refer to existing drivers.
    pub fn count_existing(
        conn: &mut PgConnection,
        ids: &[Uuid],
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        drivers.filter(id.eq_any(ids)).count().get_result(conn)
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        drivers.count().get_result(conn)
    }

    /// Counts drivers whose username matches `pattern` (an ILIKE pattern).
    pub fn count_matching(
        conn: &mut PgConnection,
        pattern: Option<&str>,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        let mut query = drivers.into_boxed();
        if let Some(p) = pattern {
            query = query.filter(username.ilike(p));
        }
        query.count().get_result(conn)
    }

    pub fn list_matching(
        conn: &mut PgConnection,
        pattern: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Driver>, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        let mut query = drivers.select(Driver::as_select()).into_boxed();
        if let Some(p) = pattern {
            query = query.filter(username.ilike(p));
        }
        query
            .order((username.asc(), id.asc()))
            .offset(offset)
            .limit(limit)
            .load(conn)
    }

    pub fn list_cars(
        conn: &mut PgConnection,
        driver_id_val: Uuid,
    ) -> Result<Vec<CarWithManufacturer>, diesel::result::Error> {
        use crate::schema::{cars, cars_drivers, manufacturers};
        let rows = cars_drivers::table
            .inner_join(cars::table.inner_join(manufacturers::table))
            .filter(cars_drivers::driver_id.eq(driver_id_val))
            .order((cars::model.asc(), cars::id.asc()))
            .select((Car::as_select(), Manufacturer::as_select()))
            .load::<(Car, Manufacturer)>(conn)?;
        Ok(rows.into_iter().map(CarWithManufacturer::from).collect())
    }

    pub fn update_license_number(
        conn: &mut PgConnection,
        driver_id: Uuid,
        license: &str,
    ) -> Result<Driver, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        diesel::update(drivers.filter(id.eq(driver_id)))
            .set(license_number.eq(license))
            .returning(Driver::as_returning())
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        driver_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::drivers::dsl::*;
        diesel::delete(drivers.filter(id.eq(driver_id))).execute(conn)
    }
}
