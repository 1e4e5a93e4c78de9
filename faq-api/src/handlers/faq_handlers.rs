use super::main_handlers::AppState;
use crate::error::AppError;
use crate::store::generate_id;
use actix_web::{web, HttpResponse, Result};
use shared_types::{ApiResponse, FaqInput, FaqRecord};
use tracing::{info, warn};

pub async fn list_faqs(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let faqs = data.store.read_all();
    let message = format!("{} FAQ(s) found", faqs.len());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(200, faqs, message)))
}

pub async fn get_faq(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let faq = data
        .store
        .read_all()
        .into_iter()
        .find(|f| f.id == id)
        .ok_or_else(|| {
            warn!(faq_id = %id, "FAQ not found");
            AppError::faq_not_found(&id)
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(200, faq, "FAQ found")))
}

pub async fn create_faq(
    data: web::Data<AppState>,
    request: web::Json<FaqInput>,
) -> Result<HttpResponse, AppError> {
    let (question, answer) = request
        .into_inner()
        .validated()
        .ok_or_else(AppError::missing_fields)?;

    let faq = data.store.mutate(|faqs| {
        let faq = FaqRecord::new(generate_id(), question, answer);
        faqs.push(faq.clone());
        Ok::<_, AppError>(faq)
    })?;

    info!(faq_id = %faq.id, "Created FAQ");

    Ok(HttpResponse::Created().json(ApiResponse::ok(201, faq, "FAQ created successfully")))
}

pub async fn update_faq(
    data: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<FaqInput>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = request.into_inner();

    let faq = data.store.mutate(|faqs| {
        let faq = faqs
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::faq_not_found(&id))?;

        let (question, answer) = input.validated().ok_or_else(AppError::missing_fields)?;
        faq.revise(question, answer);

        Ok::<_, AppError>(faq.clone())
    })?;

    info!(faq_id = %faq.id, "Updated FAQ");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(200, faq, "FAQ updated successfully")))
}

pub async fn delete_faq(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let removed = data.store.mutate(|faqs| {
        let index = faqs
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| AppError::faq_not_found(&id))?;

        Ok::<_, AppError>(faqs.remove(index))
    })?;

    info!(faq_id = %removed.id, "Deleted FAQ");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(200, removed, "FAQ deleted successfully")))
}
