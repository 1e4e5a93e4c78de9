pub mod config;
pub mod embedded_web;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod store;

use actix_cors::Cors;
use crate::config::CorsConfig;

/// Builds the CORS middleware. An empty origin list accepts any origin.
pub fn cors_from_config(cors: &CorsConfig) -> Cors {
    if cors.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    cors.allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .max_age(3600)
}
