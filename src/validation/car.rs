use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CarForm {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Model is required and must be at most 255 characters."
    ))]
    pub model: String,

    #[serde(default)]
    #[validate(required(message = "This field is required."))]
    pub manufacturer: Option<Uuid>,

    #[serde(default)]
    pub drivers: Vec<Uuid>,
}

impl CarForm {
    /// Requested driver ids with duplicates removed, in first-seen order.
    pub fn unique_drivers(&self) -> Vec<Uuid> {
        let mut seen = Vec::with_capacity(self.drivers.len());
        for id in &self.drivers {
            if !seen.contains(id) {
                seen.push(*id);
            }
        }
        seen
    }
}
