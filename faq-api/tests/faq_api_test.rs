mod common;

use actix_web::test;
use actix_web::test::TestRequest;
use common::{create_faq, list_faqs, setup_test_app};
use serde_json::{json, Value};
use std::time::Duration;

#[actix_rt::test]
async fn test_faq_lifecycle_scenario() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let created = create_faq(&test_app.app, "Q1", "A1").await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let req = TestRequest::get()
        .uri(&format!("/api/faqs/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["question"], "Q1");
    assert_eq!(body["data"]["answer"], "A1");
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);

    std::thread::sleep(Duration::from_millis(5));

    let req = TestRequest::put()
        .uri(&format!("/api/faqs/{id}"))
        .set_json(json!({ "question": "Q1", "answer": "A2" }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let updated = &body["data"];
    assert_eq!(updated["answer"], "A2");
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let created_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(updated["createdAt"].clone())?;
    let updated_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(updated["updatedAt"].clone())?;
    assert!(updated_at > created_at);

    let req = TestRequest::delete()
        .uri(&format!("/api/faqs/{id}"))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["answer"], "A2");

    let req = TestRequest::get()
        .uri(&format!("/api/faqs/{id}"))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 404);

    Ok(())
}

#[actix_rt::test]
async fn test_list_is_stable_without_mutation() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    assert!(list_faqs(&test_app.app).await.is_empty());

    create_faq(&test_app.app, "How to pay", "By card").await;
    create_faq(&test_app.app, "Where is office", "Downtown").await;

    let first = list_faqs(&test_app.app).await;
    let second = list_faqs(&test_app.app).await;

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_eq!(first[0]["question"], "How to pay");
    assert_eq!(first[1]["question"], "Where is office");

    Ok(())
}

#[actix_rt::test]
async fn test_delete_removes_exactly_one() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let a = create_faq(&test_app.app, "A?", "a").await;
    let b = create_faq(&test_app.app, "B?", "b").await;
    let c = create_faq(&test_app.app, "C?", "c").await;

    let req = TestRequest::delete()
        .uri(&format!("/api/faqs/{}", b["id"].as_str().unwrap()))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 200);

    let remaining = list_faqs(&test_app.app).await;
    let ids: Vec<&str> = remaining.iter().map(|f| f["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec![a["id"].as_str().unwrap(), c["id"].as_str().unwrap()]);

    Ok(())
}

#[actix_rt::test]
async fn test_validation_errors_leave_state_unchanged() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let existing = create_faq(&test_app.app, "Keep me", "Unchanged").await;
    let id = existing["id"].as_str().unwrap();

    let bad_bodies = vec![
        json!({}),
        json!({ "question": "Only question" }),
        json!({ "answer": "Only answer" }),
        json!({ "question": "", "answer": "A" }),
        json!({ "question": "Q", "answer": "   " }),
    ];

    for body in &bad_bodies {
        let req = TestRequest::post()
            .uri("/api/faqs")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&test_app.app, req).await;
        assert_eq!(resp.status(), 400, "POST {body} should be rejected");

        let envelope: Value = test::read_body_json(resp).await;
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["statusCode"], 400);
        assert_eq!(envelope["error"], "invalid_request");
        assert!(envelope["message"]
            .as_str()
            .unwrap()
            .contains("Question and answer are required"));

        let req = TestRequest::put()
            .uri(&format!("/api/faqs/{id}"))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&test_app.app, req).await;
        assert_eq!(resp.status(), 400, "PUT {body} should be rejected");
    }

    let faqs = list_faqs(&test_app.app).await;
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0], existing);

    Ok(())
}

#[actix_rt::test]
async fn test_malformed_json_is_bad_request() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/faqs")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"question\": ")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 400);

    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["error"], "invalid_request");
    assert!(list_faqs(&test_app.app).await.is_empty());

    Ok(())
}

#[actix_rt::test]
async fn test_unknown_id_is_not_found() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    create_faq(&test_app.app, "Existing", "Entry").await;

    let req = TestRequest::get().uri("/api/faqs/missing-id").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 404);
    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["error"], "not_found");
    assert!(envelope.get("data").is_none());

    // Not-found wins over validation on update
    let req = TestRequest::put()
        .uri("/api/faqs/missing-id")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 404);

    let req = TestRequest::put()
        .uri("/api/faqs/missing-id")
        .set_json(json!({ "question": "Q", "answer": "A" }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 404);

    let req = TestRequest::delete().uri("/api/faqs/missing-id").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 404);

    assert_eq!(list_faqs(&test_app.app).await.len(), 1);

    Ok(())
}

#[actix_rt::test]
async fn test_created_values_are_trimmed_and_persisted() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let created = create_faq(&test_app.app, "  Padded question  ", "\tPadded answer\n").await;
    assert_eq!(created["question"], "Padded question");
    assert_eq!(created["answer"], "Padded answer");

    let on_disk = test_app.store.read_all();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].id, created["id"].as_str().unwrap());

    let raw = std::fs::read_to_string(test_app.store.path())?;
    assert!(raw.contains("\"question\": \"Padded question\""));

    Ok(())
}

#[actix_rt::test]
async fn test_corrupt_file_lists_empty() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    std::fs::write(test_app.store.path(), "not json at all")?;

    assert!(list_faqs(&test_app.app).await.is_empty());

    // The next write replaces the corrupt file with a valid collection
    create_faq(&test_app.app, "Fresh", "Start").await;
    assert_eq!(list_faqs(&test_app.app).await.len(), 1);

    Ok(())
}

#[actix_rt::test]
async fn test_unwritable_data_file_is_storage_error() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let created = create_faq(&test_app.app, "Q", "A").await;
    let id = created["id"].as_str().unwrap().to_string();

    // A directory in place of the data file fails both the read and the write
    std::fs::remove_file(test_app.store.path())?;
    std::fs::create_dir(test_app.store.path())?;

    let req = TestRequest::post()
        .uri("/api/faqs")
        .set_json(json!({ "question": "New", "answer": "Entry" }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 500);
    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["statusCode"], 500);
    assert_eq!(envelope["error"], "storage_error");
    assert!(envelope.get("data").is_none());

    // The unreadable file lists as empty, so the record is no longer found
    let req = TestRequest::put()
        .uri(&format!("/api/faqs/{id}"))
        .set_json(json!({ "question": "Q", "answer": "B" }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 404);

    let req = TestRequest::delete()
        .uri(&format!("/api/faqs/{id}"))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 404);

    assert!(test_app.store.path().is_dir());
    assert!(list_faqs(&test_app.app).await.is_empty());

    Ok(())
}

#[actix_rt::test]
async fn test_health_reports_count() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    create_faq(&test_app.app, "Q", "A").await;

    let req = TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&test_app.app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["faqCount"], 1);

    Ok(())
}

#[actix_rt::test]
async fn test_unknown_api_route_uses_envelope() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "not_found");

    Ok(())
}

#[actix_rt::test]
async fn test_root_serves_web_ui() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("id=\"faqList\""));

    let req = TestRequest::get().uri("/script.js").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), 200);

    Ok(())
}
