// Login gating, exercised through the router without a database

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    middleware::from_fn,
};
use taxi_service::{
    db::models::Driver,
    middleware::{REQUEST_ID_HEADER, request_tracking_middleware},
};
use tower::ServiceExt;

use crate::{app_without_database, body_json, get};

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn anonymous_listing_redirects_to_login() {
    let (app, _) = app_without_database();

    let response = app.oneshot(get("/drivers")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/accounts/login?next=/drivers");
}

#[tokio::test]
async fn redirect_keeps_query_in_next() {
    let (app, _) = app_without_database();

    let response = app.oneshot(get("/cars?page=2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/accounts/login?next=/cars%3Fpage%3D2");
}

#[tokio::test]
async fn every_page_is_gated() {
    let (app, _) = app_without_database();

    for uri in ["/", "/manufacturers", "/cars", "/drivers?username=driver1"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND, "{} was not gated", uri);
    }

    let create = Request::builder()
        .method("POST")
        .uri("/manufacturers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Toyota","country":"Japan"}"#))
        .unwrap();
    let response = app.oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn invalid_tokens_redirect_to_login() {
    let (app, _) = app_without_database();

    let bearer = Request::builder()
        .uri("/drivers")
        .header(header::AUTHORIZATION, "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(bearer).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);

    let cookie = Request::builder()
        .uri("/drivers")
        .header(header::COOKIE, "sessionid=garbage")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(cookie).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/accounts/login?next=/drivers");
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let (app, _) = app_without_database();

    let response = app.oneshot(get("/nowhere")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_with_empty_form_reports_field_errors() {
    let (app, _) = app_without_database();

    let request = Request::builder()
        .method("POST")
        .uri("/accounts/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["password", "username"]);
}

#[tokio::test]
async fn logout_clears_session_cookie() {
    let (app, _) = app_without_database();

    let request = Request::builder()
        .method("POST")
        .uri("/accounts/logout")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.starts_with("sessionid=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn next_keeps_tilde_literal() {
    let (app, _) = app_without_database();

    let response = app.oneshot(get("/drivers?username=a~b")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        "/accounts/login?next=/drivers%3Fusername%3Da~b"
    );
}

#[tokio::test]
async fn valid_session_with_database_down_is_server_error() {
    let (app, state) = app_without_database();
    let driver = Driver {
        id: uuid::Uuid::new_v4(),
        username: "driver1".to_string(),
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        password_hash: String::new(),
        license_number: "ABC12345".to_string(),
        is_active: true,
        date_joined: chrono::Utc::now(),
    };
    let token = state.auth_service.generate_session_token(&driver).unwrap();

    let request = Request::builder()
        .uri("/drivers")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn request_id_is_assigned_and_propagated() {
    let (app, _) = app_without_database();
    let app = app.layer(from_fn(request_tracking_middleware));

    let response = app.clone().oneshot(get("/drivers")).await.unwrap();
    let assigned = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(uuid::Uuid::parse_str(assigned).is_ok());

    let request = Request::builder()
        .uri("/drivers")
        .header(REQUEST_ID_HEADER, "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "req-42"
    );
}
