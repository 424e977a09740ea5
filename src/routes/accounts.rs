use crate::{
    AppState,
    db::models::{ApiResponse, CurrentDriver},
    error::{AppError, AppResult},
    middleware::auth::is_safe_next,
    services::{AccountsService, accounts_service::LoginForm},
    validation::ValidatedJson,
};
use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::with_conn;

#[derive(Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub driver: CurrentDriver,
    pub redirect_to: String,
}

fn cookie_header(value: String) -> AppResult<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|_| AppError::internal("Invalid session cookie"))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LoginQuery>,
    ValidatedJson(form): ValidatedJson<LoginForm>,
) -> AppResult<Response> {
    let driver = with_conn(&state, move |conn| AccountsService::authenticate(conn, &form)).await?;

    let access_token = state.auth_service.generate_session_token(&driver)?;
    let cookie = cookie_header(state.auth_service.session_cookie(&access_token))?;
    let redirect_to = query
        .next
        .filter(|next| is_safe_next(next))
        .unwrap_or_else(|| "/".to_string());

    tracing::info!(driver_id = %driver.id, username = %driver.username, "Driver logged in");

    let body = LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth_service.expires_in(),
        driver: CurrentDriver::from(&driver),
        redirect_to,
    };

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponse::success(body, "Login successful")),
    )
        .into_response())
}

pub async fn logout(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let cookie = cookie_header(state.auth_service.clear_session_cookie())?;
    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponse::<()>::ok("Logged out")),
    )
        .into_response())
}
