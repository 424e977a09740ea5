pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod services;
pub mod utils;
pub mod validation;

use crate::config::Config;
use crate::db::DbPool;
use crate::middleware::auth::{AuthConfig, AuthService};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<Config>,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        let auth_service = AuthService::new(AuthConfig::from(&config.session()));
        Self {
            db,
            config: Arc::new(config),
            auth_service,
        }
    }
}

pub fn init_tracing(config: &Config) {
    let logging = config.logging();
    let level_filter = match logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => logging.level.as_str(),
        _ => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_filter));

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .init();
        }
    }
}
