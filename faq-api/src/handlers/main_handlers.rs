use crate::error::AppError;
use crate::store::FaqStore;
use actix_web::{web, HttpResponse, Result};
use shared_types::{ApiResponse, ServerStatus};
use std::sync::Arc;
use std::time::SystemTime;

pub struct AppState {
    pub store: Arc<FaqStore>,
    pub start_time: SystemTime,
}

impl AppState {
    pub fn new(store: Arc<FaqStore>) -> Self {
        Self {
            store,
            start_time: SystemTime::now(),
        }
    }
}

pub async fn health_check(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let uptime = data
        .start_time
        .elapsed()
        .map_err(|e| AppError::Internal(format!("Failed to calculate uptime: {e}")))?
        .as_secs();

    let status = ServerStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime,
        faq_count: data.store.read_all().len(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(200, status, "Server is running")))
}

/// Fallback for unmatched `/api/*` paths.
pub async fn api_not_found(req: actix_web::HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!(
        "No API route for {} {}",
        req.method(),
        req.path()
    )))
}
