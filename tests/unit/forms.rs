// Form validation: every field error is reported against its field

use taxi_service::{
    error::AppError,
    validation::{
        car::CarForm,
        driver::{DriverCreationForm, DriverLicenseUpdateForm},
        validate_form,
    },
};
use uuid::Uuid;

fn error_fields(result: Result<(), AppError>) -> Vec<String> {
    match result {
        Err(AppError::Form { errors }) => errors.into_iter().filter_map(|e| e.field).collect(),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(()) => Vec::new(),
    }
}

fn creation_form(license_number: &str) -> DriverCreationForm {
    DriverCreationForm {
        username: "test_driver".to_string(),
        password1: "test_password123".to_string(),
        password2: "test_password123".to_string(),
        license_number: license_number.to_string(),
        first_name: "Test".to_string(),
        last_name: "Driver".to_string(),
        email: String::new(),
    }
}

#[test]
fn driver_creation_form_valid() {
    assert!(validate_form(&creation_form("ABC12345")).is_ok());
}

#[test]
fn driver_creation_form_invalid_license() {
    let fields = error_fields(validate_form(&creation_form("123ABC45")));
    assert_eq!(fields, vec!["license_number".to_string()]);
}

#[test]
fn driver_creation_form_collects_all_errors() {
    let mut form = creation_form("abc");
    form.username = "bad name".to_string();
    form.password2 = "something_else1".to_string();
    form.email = "not-an-email".to_string();

    let fields = error_fields(validate_form(&form));
    for expected in ["email", "license_number", "password2", "username"] {
        assert!(fields.contains(&expected.to_string()), "missing {}", expected);
    }
}

#[test]
fn driver_creation_form_from_sparse_json() {
    let form: DriverCreationForm =
        serde_json::from_value(serde_json::json!({ "username": "driver1" })).unwrap();
    let fields = error_fields(validate_form(&form));
    assert!(fields.contains(&"password1".to_string()));
    assert!(fields.contains(&"license_number".to_string()));
}

#[test]
fn license_update_form_valid() {
    let form = DriverLicenseUpdateForm {
        license_number: "XYZ67890".to_string(),
    };
    assert!(validate_form(&form).is_ok());
}

#[test]
fn license_update_form_invalid() {
    let form = DriverLicenseUpdateForm {
        license_number: "invalid".to_string(),
    };
    assert_eq!(
        error_fields(validate_form(&form)),
        vec!["license_number".to_string()]
    );
}

#[test]
fn car_form_valid_and_invalid() {
    let mut form = CarForm {
        model: "TestModel".to_string(),
        manufacturer: Some(Uuid::new_v4()),
        drivers: vec![Uuid::new_v4(), Uuid::new_v4()],
    };
    assert!(validate_form(&form).is_ok());

    form.model = String::new();
    assert_eq!(error_fields(validate_form(&form)), vec!["model".to_string()]);
}
