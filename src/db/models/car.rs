use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::db::models::driver::Driver;
use crate::db::models::manufacturer::Manufacturer;

// Car models
#[derive(Queryable, Selectable, Identifiable, Associations, Serialize, Clone, Debug)]
#[diesel(belongs_to(Manufacturer))]
#[diesel(table_name = crate::schema::cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Car {
    pub id: Uuid,
    pub model: String,
    pub manufacturer_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::cars)]
pub struct NewCar {
    pub model: String,
    pub manufacturer_id: Uuid,
}

// Car <-> Driver assignment
#[derive(Queryable, Selectable, Identifiable, Associations, Insertable, Clone, Debug)]
#[diesel(belongs_to(Car))]
#[diesel(belongs_to(Driver))]
#[diesel(table_name = crate::schema::cars_drivers)]
#[diesel(primary_key(car_id, driver_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CarDriver {
    pub car_id: Uuid,
    pub driver_id: Uuid,
}

#[derive(Serialize, Clone, Debug)]
pub struct CarWithManufacturer {
    #[serde(flatten)]
    pub car: Car,
    pub manufacturer: Manufacturer,
}

impl From<(Car, Manufacturer)> for CarWithManufacturer {
    fn from((car, manufacturer): (Car, Manufacturer)) -> Self {
        Self { car, manufacturer }
    }
}

#[derive(Serialize)]
pub struct CarDetail {
    #[serde(flatten)]
    pub car: Car,
    pub manufacturer: Manufacturer,
    pub drivers: Vec<Driver>,
}
