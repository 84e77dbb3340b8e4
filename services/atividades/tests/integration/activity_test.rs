use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{Value, json};

use escola_testing::registry_server::MockRegistryServer;

use crate::helpers::{prova, server_for, test_server};

#[tokio::test]
async fn should_answer_health() {
    let (server, _registry) = test_server().await;

    let resp = server.get("/health").await;

    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({"status": "ok", "service": "atividades"})
    );
}

#[tokio::test]
async fn should_create_activity_with_known_references() {
    let (server, _registry) = test_server().await;

    let resp = server.post("/atividades").json(&prova(1, 1)).await;

    resp.assert_status(StatusCode::CREATED);
    assert_eq!(
        resp.json::<Value>(),
        json!({
            "id": 1,
            "titulo": "Prova de História",
            "descricao": "capítulos 1 a 3",
            "professor_id": 1,
            "turma_id": 1
        })
    );
}

#[tokio::test]
async fn should_list_activities_in_insertion_order() {
    let (server, _registry) = test_server().await;
    server.post("/atividades").json(&prova(1, 1)).await;
    server
        .post("/atividades")
        .json(&json!({"titulo": "Trabalho", "professor_id": 1, "turma_id": 1}))
        .await;

    let list: Value = server.get("/atividades").await.json();

    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[1]["id"], 2);
    assert_eq!(list[1]["titulo"], "Trabalho");
    assert_eq!(list[1]["descricao"], Value::Null);
}

#[tokio::test]
async fn should_reject_unknown_teacher_without_storing() {
    let (server, registry) = test_server().await;

    let resp = server.post("/atividades").json(&prova(999, 1)).await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "REFERENCE_NOT_FOUND");
    assert_eq!(body["error"], "teacher 999 not found");
    // The class group is never looked up once the teacher is missing.
    assert_eq!(registry.hits(), 1);
    assert_eq!(server.get("/atividades").await.json::<Value>(), json!([]));
}

#[tokio::test]
async fn should_reject_unknown_class_group() {
    let (server, _registry) = test_server().await;

    let resp = server.post("/atividades").json(&prova(1, 7)).await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["error"], "class group 7 not found");
}

#[tokio::test]
async fn should_reject_missing_field_without_calling_registry() {
    let (server, registry) = test_server().await;

    let resp = server
        .post("/atividades")
        .json(&json!({"titulo": "Prova", "professor_id": 1}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "VALIDATION_FAILED");
    assert_eq!(registry.hits(), 0);
}

#[tokio::test]
async fn should_reject_non_json_body() {
    let (server, _registry) = test_server().await;

    let resp = server.post("/atividades").text("titulo=Prova").await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn should_return_503_when_registry_fails() {
    let registry = MockRegistryServer::start().await;
    registry.fail_with(500);
    let server = server_for(&registry, Duration::from_secs(2));

    let resp = server.post("/atividades").json(&prova(1, 1)).await;

    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.json::<Value>()["kind"], "UPSTREAM_UNAVAILABLE");
    // One retry after the first 500.
    assert_eq!(registry.hits(), 2);
    assert_eq!(server.get("/atividades").await.json::<Value>(), json!([]));
}

#[tokio::test]
async fn should_return_503_when_registry_times_out() {
    let registry = MockRegistryServer::start().await;
    registry.delay_by(Duration::from_millis(500));
    let server = server_for(&registry, Duration::from_millis(50));

    let resp = server.post("/atividades").json(&prova(1, 1)).await;

    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        resp.json::<Value>()["error"],
        "registry unavailable while checking teacher 1"
    );
}
