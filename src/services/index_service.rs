use diesel::prelude::*;
use serde::Serialize;

use crate::{
    db::repositories::{CarRepo, DriverRepo, ManufacturerRepo},
    error::AppError,
};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FleetSummary {
    pub num_drivers: i64,
    pub num_cars: i64,
    pub num_manufacturers: i64,
}

pub struct IndexService;

impl IndexService {
    pub fn summary(conn: &mut PgConnection) -> Result<FleetSummary, AppError> {
        Ok(FleetSummary {
            num_drivers: DriverRepo::count(conn)?,
            num_cars: CarRepo::count(conn)?,
            num_manufacturers: ManufacturerRepo::count(conn)?,
        })
    }
}
