use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Queryable, Selectable, Identifiable, Serialize, Clone, Debug)]
#[diesel(table_name = crate::schema::manufacturers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Manufacturer {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::manufacturers)]
pub struct NewManufacturer {
    pub name: String,
    pub country: String,
}
