use uuid::Uuid;

use crate::db::models::CurrentDriver;

#[derive(Clone, Debug)]
pub struct RequestContext {
    pub driver_id: Uuid,
    pub username: String,
    pub request_id: Option<String>,
}

impl RequestContext {
    pub fn new(driver: &CurrentDriver, request_id: Option<String>) -> Self {
        Self {
            driver_id: driver.id,
            username: driver.username.clone(),
            request_id,
        }
    }
}
