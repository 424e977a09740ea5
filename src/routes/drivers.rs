use crate::{
    AppState,
    db::models::{ApiResponse, ResponseMeta},
    error::AppResult,
    middleware::RequestId,
    services::DriversService,
    validation::{
        ValidatedJson,
        driver::{DriverCreationForm, DriverLicenseUpdateForm},
        search::DriverSearchForm,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use super::with_conn;

#[derive(Deserialize, Default)]
pub struct DriverListQuery {
    pub username: Option<String>,
    pub page: Option<String>,
}

pub async fn list_drivers(
    State(state): State<Arc<AppState>>,
    request_id: Option<Extension<RequestId>>,
    Query(params): Query<DriverListQuery>,
) -> AppResult<impl IntoResponse> {
    let search_form = DriverSearchForm::bind(params.username);
    let context = with_conn(&state, move |conn| {
        DriversService::list(conn, search_form, params.page.as_deref())
    })
    .await?;

    let meta = ResponseMeta {
        request_id: request_id.map(|Extension(RequestId(id))| id),
        total_count: Some(context.page.count),
    };
    Ok(Json(ApiResponse::success_with_meta(
        context,
        "Drivers retrieved successfully",
        meta,
    )))
}

pub async fn create_driver(
    State(state): State<Arc<AppState>>,
    ValidatedJson(form): ValidatedJson<DriverCreationForm>,
) -> AppResult<impl IntoResponse> {
    let bcrypt_cost = state.config.bcrypt_cost;
    let driver = with_conn(&state, move |conn| {
        DriversService::create(conn, &form, bcrypt_cost)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(driver, "Driver created successfully")),
    ))
}

pub async fn get_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let detail = with_conn(&state, move |conn| DriversService::detail(conn, driver_id)).await?;
    Ok(Json(ApiResponse::success(detail, "Driver retrieved successfully")))
}

pub async fn update_driver_license(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
    ValidatedJson(form): ValidatedJson<DriverLicenseUpdateForm>,
) -> AppResult<impl IntoResponse> {
    let driver = with_conn(&state, move |conn| {
        DriversService::update_license(conn, driver_id, &form)
    })
    .await?;
    Ok(Json(ApiResponse::success(driver, "License number updated successfully")))
}

pub async fn delete_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    with_conn(&state, move |conn| DriversService::delete(conn, driver_id)).await?;
    Ok(Json(ApiResponse::<()>::ok("Driver deleted successfully")))
}
