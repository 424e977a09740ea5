pub mod accounts;
pub mod cars;
pub mod drivers;
pub mod index;
pub mod manufacturers;

use crate::{AppState, error::AppError, middleware::login_required};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use diesel::PgConnection;
use std::sync::Arc;
use tokio::task;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Every page except login/logout requires an authenticated driver
    let protected_routes = Router::new()
        .route("/", get(index::index))
        .route(
            "/drivers",
            get(drivers::list_drivers).post(drivers::create_driver),
        )
        .route(
            "/drivers/:driver_id",
            get(drivers::get_driver).delete(drivers::delete_driver),
        )
        .route(
            "/drivers/:driver_id/license",
            put(drivers::update_driver_license),
        )
        .route(
            "/manufacturers",
            get(manufacturers::list_manufacturers).post(manufacturers::create_manufacturer),
        )
        .route(
            "/manufacturers/:manufacturer_id",
            put(manufacturers::update_manufacturer).delete(manufacturers::delete_manufacturer),
        )
        .route("/cars", get(cars::list_cars).post(cars::create_car))
        .route(
            "/cars/:car_id",
            get(cars::get_car)
                .put(cars::update_car)
                .delete(cars::delete_car),
        )
        .route("/cars/:car_id/toggle-assign", post(cars::toggle_assign))
        .route_layer(from_fn_with_state(state.clone(), login_required))
        .with_state(state.clone());

    let account_routes = Router::new()
        .route("/accounts/login", post(accounts::login))
        .route("/accounts/logout", post(accounts::logout))
        .with_state(state);

    account_routes.merge(protected_routes)
}

/// Runs blocking diesel (and bcrypt) work on the blocking pool with a pooled connection.
pub(crate) async fn with_conn<T, F>(state: &Arc<AppState>, f: F) -> Result<T, AppError>
where
    F: FnOnce(&mut PgConnection) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let pool = state.db.clone();
    task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await
    .map_err(|e| AppError::internal(format!("Blocking task failed: {}", e)))?
}
