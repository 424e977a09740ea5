use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::models::car::CarWithManufacturer;

// Driver models
#[derive(Queryable, Selectable, Identifiable, Serialize, Clone, Debug)]
#[diesel(table_name = crate::schema::drivers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Driver {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub license_number: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::drivers)]
pub struct NewDriver {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub license_number: String,
}

#[derive(Serialize)]
pub struct DriverDetail {
    #[serde(flatten)]
    pub driver: Driver,
    pub cars: Vec<CarWithManufacturer>,
}

/// The authenticated driver attached to a request by the login gate.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CurrentDriver {
    pub id: Uuid,
    pub username: String,
    pub license_number: String,
}

impl From<&Driver> for CurrentDriver {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            username: driver.username.clone(),
            license_number: driver.license_number.clone(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentDriver
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentDriver>()
            .cloned()
            .ok_or((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()))
    }
}
