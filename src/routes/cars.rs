use crate::{
    AppState,
    db::models::{ApiResponse, CurrentDriver, ResponseMeta},
    error::AppResult,
    middleware::RequestId,
    services::{CarsService, context::RequestContext},
    validation::{ValidatedJson, car::CarForm, search::CarSearchForm},
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
pub struct CarListQuery {
    pub model: Option<String>,
    pub page: Option<String>,
}

pub async fn list_cars(
    State(state): State<Arc<AppState>>,
    request_id: Option<Extension<RequestId>>,
    Query(params): Query<CarListQuery>,
) -> AppResult<impl IntoResponse> {
    let search_form = CarSearchForm::bind(params.model);
    let context = with_conn(&state, move |conn| {
        CarsService::list(conn, search_form, params.page.as_deref())
    })
    .await?;

    let meta = ResponseMeta {
        request_id: request_id.map(|Extension(RequestId(id))| id),
        total_count: Some(context.page.count),
    };
    Ok(Json(ApiResponse::success_with_meta(
        context,
        "Cars retrieved successfully",
        meta,
    )))
}

pub async fn create_car(
    State(state): State<Arc<AppState>>,
    ValidatedJson(form): ValidatedJson<CarForm>,
) -> AppResult<impl IntoResponse> {
    let car = with_conn(&state, move |conn| CarsService::create(conn, &form)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(car, "Car created successfully")),
    ))
}

pub async fn get_car(
    State(state): State<Arc<AppState>>,
    Path(car_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let car = with_conn(&state, move |conn| CarsService::detail(conn, car_id)).await?;
    Ok(Json(ApiResponse::success(car, "Car retrieved successfully")))
}

pub async fn update_car(
    State(state): State<Arc<AppState>>,
    Path(car_id): Path<Uuid>,
    ValidatedJson(form): ValidatedJson<CarForm>,
) -> AppResult<impl IntoResponse> {
    let car = with_conn(&state, move |conn| CarsService::update(conn, car_id, &form)).await?;
    Ok(Json(ApiResponse::success(car, "Car updated successfully")))
}

pub async fn delete_car(
    State(state): State<Arc<AppState>>,
    Path(car_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    with_conn(&state, move |conn| CarsService::delete(conn, car_id)).await?;
    Ok(Json(ApiResponse::<()>::ok("Car deleted successfully")))
}

pub async fn toggle_assign(
    State(state): State<Arc<AppState>>,
    request_id: Option<Extension<RequestId>>,
    driver: CurrentDriver,
    Path(car_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let ctx = RequestContext::new(&driver, request_id.map(|Extension(RequestId(id))| id));
    let car = with_conn(&state, move |conn| CarsService::toggle_assign(conn, &ctx, car_id)).await?;
    Ok(Json(ApiResponse::success(car, "Car assignment updated")))
}
