use taxi_service::validation::search::{
    CarSearchForm, DriverSearchForm, ManufacturerSearchForm, SearchForm,
};

#[test]
fn missing_or_empty_query_means_no_filter() {
    assert_eq!(DriverSearchForm::bind(None).contains_pattern(), None);
    assert_eq!(CarSearchForm::bind(Some(String::new())).contains_pattern(), None);
}

#[test]
fn query_is_a_substring_pattern() {
    assert_eq!(
        ManufacturerSearchForm::bind(Some("Manufacturer1".to_string())).contains_pattern(),
        Some("%Manufacturer1%".to_string())
    );
}

#[test]
fn bound_form_echoes_query() {
    let form = DriverSearchForm::bind(Some("driver1".to_string()));
    assert_eq!(
        serde_json::to_value(&form).unwrap(),
        serde_json::json!({ "username": "driver1" })
    );
}
