use serde::Deserialize;
use validator::Validate;

use crate::db::models::manufacturer::NewManufacturer;

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct ManufacturerForm {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name is required and must be at most 255 characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Country is required and must be at most 255 characters."
    ))]
    pub country: String,
}

impl From<&ManufacturerForm> for NewManufacturer {
    fn from(form: &ManufacturerForm) -> Self {
        Self {
            name: form.name.clone(),
            country: form.country.clone(),
        }
    }
}
