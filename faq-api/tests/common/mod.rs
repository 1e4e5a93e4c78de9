//! Shared setup for the HTTP integration tests.
//!
//! Every test gets its own temporary data directory so tests can run in
//! parallel without sharing the FAQ file.

use actix_web::{test, web, App};
use faq_api::handlers::AppState;
use faq_api::routes::configure_routes;
use faq_api::store::FaqStore;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

#[allow(dead_code)]
pub struct TestApp<S> {
    pub temp_dir: TempDir,
    pub store: Arc<FaqStore>,
    pub app: S,
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let temp_dir = tempfile::tempdir()?;
    let store = Arc::new(FaqStore::new(temp_dir.path().join("data").join("faqs.json")));
    store.ensure_parent_dir()?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(store.clone())))
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp {
        temp_dir,
        store,
        app,
    })
}

/// POSTs a FAQ and returns the `data` payload of the envelope.
pub async fn create_faq<S>(app: &S, question: &str, answer: &str) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::post()
        .uri("/api/faqs")
        .set_json(serde_json::json!({ "question": question, "answer": answer }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "create should return 201");

    let body: Value = test::read_body_json(resp).await;
    body["data"].clone()
}

pub async fn list_faqs<S>(app: &S) -> Vec<Value>
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::get().uri("/api/faqs").to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;

    body["data"].as_array().cloned().unwrap_or_default()
}
