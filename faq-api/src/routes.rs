//! Centralized route configuration for the FAQ server.
//!
//! Both `main` and the integration tests build their `App` through
//! [`configure_routes`] so they always serve the same surface.

use crate::embedded_web::configure_embedded_routes;
use crate::error::AppError;
use crate::handlers::{faq_handlers, main_handlers};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("/health", web::get().to(main_handlers::health_check))
            .service(
                web::resource("/faqs")
                    .route(web::get().to(faq_handlers::list_faqs))
                    .route(web::post().to(faq_handlers::create_faq)),
            )
            .service(
                web::resource("/faqs/{id}")
                    .route(web::get().to(faq_handlers::get_faq))
                    .route(web::put().to(faq_handlers::update_faq))
                    .route(web::delete().to(faq_handlers::delete_faq)),
            )
            .default_service(web::to(main_handlers::api_not_found)),
    );

    // Browser UI, must come after the API scope
    configure_embedded_routes(cfg);
}

/// Malformed JSON bodies are reported through the regular error envelope.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidRequest(format!("Invalid JSON body: {err}")).into())
}
