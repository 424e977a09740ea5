use crate::{AppState, db::models::ApiResponse, error::AppResult, services::IndexService};
use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use super::with_conn;

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let summary = with_conn(&state, IndexService::summary).await?;
    Ok(Json(ApiResponse::success(summary, "Fleet summary")))
}
