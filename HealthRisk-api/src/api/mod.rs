pub mod handlers;
pub mod routes;


use axum::Router;

use crate::config::ServerConfig;

/// Create the application router
pub fn create_application(config: ServerConfig) -> Router {
    routes::create_app_with_config(config)
}
