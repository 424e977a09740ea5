use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::manufacturer::{Manufacturer, NewManufacturer};

pub struct ManufacturerRepo;

impl ManufacturerRepo {
    pub fn exists_by_name(
        conn: &mut PgConnection,
        manufacturer_name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::manufacturers::dsl::*;
        let mut query = manufacturers.filter(name.eq(manufacturer_name)).into_boxed();
        if let Some(excluded) = exclude_id {
            query = query.filter(id.ne(excluded));
        }
        diesel::select(diesel::dsl::exists(query)).get_result(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_manufacturer: &NewManufacturer,
    ) -> Result<Manufacturer, diesel::result::Error> {
        diesel::insert_into(crate::schema::manufacturers::table)
            .values(new_manufacturer)
            .returning(Manufacturer::as_returning())
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        manufacturer_id: Uuid,
    ) -> Result<Option<Manufacturer>, diesel::result::Error> {
        use crate::schema::manufacturers::dsl::*;
        manufacturers
            .filter(id.eq(manufacturer_id))
            .select(Manufacturer::as_select())
            .first(conn)
            .optional()
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, diesel::result::Error> {
        use crate::schema::manufacturers::dsl::*;
        manufacturers.count().get_result(conn)
    }

    pub fn count_matching(
        conn: &mut PgConnection,
        pattern: Option<&str>,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::manufacturers::dsl::*;
        let mut query = manufacturers.into_boxed();
        if let Some(p) = pattern {
            query = query.filter(name.ilike(p));
        }
        query.count().get_result(conn)
    }

    pub fn list_matching(
        conn: &mut PgConnection,
        pattern: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Manufacturer>, diesel::result::Error> {
        use crate::schema::manufacturers::dsl::*;
        let mut query = manufacturers.select(Manufacturer::as_select()).into_boxed();
        if let Some(p) = pattern {
            query = query.filter(name.ilike(p));
        }
        query
            .order((name.asc(), id.asc()))
            .offset(offset)
            .limit(limit)
            .load(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        manufacturer_id: Uuid,
        changes: &NewManufacturer,
    ) -> Result<Manufacturer, diesel::result::Error> {
        use crate::schema::manufacturers::dsl::*;
        diesel::update(manufacturers.filter(id.eq(manufacturer_id)))
            .set(changes)
            .returning(Manufacturer::as_returning())
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        manufacturer_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::manufacturers::dsl::*;
        diesel::delete(manufacturers.filter(id.eq(manufacturer_id))).execute(conn)
    }
}
