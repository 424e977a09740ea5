use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single-field free-text search form bound to a listing's query string.
pub trait SearchForm: Validate {
    fn query(&self) -> &str;

    /// ILIKE pattern for the bound query, `None` when the listing should not
    /// be filtered (absent, empty or invalid input).
    fn contains_pattern(&self) -> Option<String> {
        if self.query().is_empty() || self.validate().is_err() {
            return None;
        }
        Some(format!("%{}%", escape_like(self.query())))
    }
}

/// Escapes LIKE wildcards so the query matches literally.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Deserialize, Serialize, Validate, Default, Debug, Clone, PartialEq)]
pub struct DriverSearchForm {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub username: String,
}

impl DriverSearchForm {
    pub fn bind(username: Option<String>) -> Self {
        Self {
            username: username.unwrap_or_default(),
        }
    }
}

impl SearchForm for DriverSearchForm {
    fn query(&self) -> &str {
        &self.username
    }
}

#[derive(Deserialize, Serialize, Validate, Default, Debug, Clone, PartialEq)]
pub struct ManufacturerSearchForm {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub name: String,
}

impl ManufacturerSearchForm {
    pub fn bind(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_default(),
        }
    }
}

impl SearchForm for ManufacturerSearchForm {
    fn query(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Serialize, Validate, Default, Debug, Clone, PartialEq)]
pub struct CarSearchForm {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub model: String,
}

impl CarSearchForm {
    pub fn bind(model: Option<String>) -> Self {
        Self {
            model: model.unwrap_or_default(),
        }
    }
}

impl SearchForm for CarSearchForm {
    fn query(&self) -> &str {
        &self.model
    }
}
