use axum::{Server, http::HeaderValue, middleware::from_fn};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use taxi_service::{
    AppState, config::Config, db::DbPool, error::AppError, init_tracing,
    middleware::request_tracking_middleware, routes,
};
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    init_tracing(&config);

    // Initialize database
    let database = config.database();
    let manager = DbConnectionManager::<PgConnection>::new(&database.url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(database.max_connections)
        .min_idle(Some(database.min_connections))
        .connection_timeout(Duration::from_secs(database.connection_timeout))
        .build(manager)?;

    let addr: SocketAddr = config
        .server_address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;
    let cors = cors_layer(&config.cors_origins);

    let state = Arc::new(AppState::new(db, config));

    let app = routes::create_router(state)
        .layer(cors)
        .layer(from_fn(request_tracking_middleware));

    tracing::info!(%addr, "Taxi service listening");
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    layer.allow_origin(origins)
}
