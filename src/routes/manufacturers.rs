use crate::{
    AppState,
    db::models::{ApiResponse, ResponseMeta},
    error::AppResult,
    middleware::RequestId,
    services::ManufacturersService,
    validation::{ValidatedJson, manufacturer::ManufacturerForm, search::ManufacturerSearchForm},
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
pub struct ManufacturerListQuery {
    pub name: Option<String>,
    pub page: Option<String>,
}

pub async fn list_manufacturers(
    State(state): State<Arc<AppState>>,
    request_id: Option<Extension<RequestId>>,
    Query(params): Query<ManufacturerListQuery>,
) -> AppResult<impl IntoResponse> {
    let search_form = ManufacturerSearchForm::bind(params.name);
    let context = with_conn(&state, move |conn| {
        ManufacturersService::list(conn, search_form, params.page.as_deref())
    })
    .await?;

    let meta = ResponseMeta {
        request_id: request_id.map(|Extension(RequestId(id))| id),
        total_count: Some(context.page.count),
    };
    Ok(Json(ApiResponse::success_with_meta(
        context,
        "Manufacturers retrieved successfully",
        meta,
    )))
}

pub async fn create_manufacturer(
    State(state): State<Arc<AppState>>,
    ValidatedJson(form): ValidatedJson<ManufacturerForm>,
) -> AppResult<impl IntoResponse> {
    let manufacturer =
        with_conn(&state, move |conn| ManufacturersService::create(conn, &form)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            manufacturer,
            "Manufacturer created successfully",
        )),
    ))
}

pub async fn update_manufacturer(
    State(state): State<Arc<AppState>>,
    Path(manufacturer_id): Path<Uuid>,
    ValidatedJson(form): ValidatedJson<ManufacturerForm>,
) -> AppResult<impl IntoResponse> {
    let manufacturer = with_conn(&state, move |conn| {
        ManufacturersService::update(conn, manufacturer_id, &form)
    })
    .await?;
    Ok(Json(ApiResponse::success(
        manufacturer,
        "Manufacturer updated successfully",
    )))
}

pub async fn delete_manufacturer(
    State(state): State<Arc<AppState>>,
    Path(manufacturer_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    with_conn(&state, move |conn| {
        ManufacturersService::delete(conn, manufacturer_id)
    })
    .await?;
    Ok(Json(ApiResponse::<()>::ok("Manufacturer deleted successfully")))
}
