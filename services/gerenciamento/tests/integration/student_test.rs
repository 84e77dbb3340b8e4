use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{ana, test_server};

#[tokio::test]
async fn should_answer_health_on_root_and_api() {
    let server = test_server().await;
    let expected = json!({"status": "ok", "service": "gerenciamento"});

    let root = server.get("/health").await;
    root.assert_status_ok();
    assert_eq!(root.json::<Value>(), expected);

    let api = server.get("/api/health").await;
    api.assert_status_ok();
    assert_eq!(api.json::<Value>(), expected);
}

#[tokio::test]
async fn should_list_students_in_insertion_order() {
    let server = test_server().await;
    server.post("/api/alunos").json(&ana()).await;
    server
        .post("/api/alunos")
        .json(&json!({"nome": "Bruno", "email": "bruno@escola.com"}))
        .await;

    let resp = server.get("/api/alunos").await;

    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!([
            {"id": 1, "nome": "Ana", "email": "ana@escola.com"},
            {"id": 2, "nome": "Bruno", "email": "bruno@escola.com"}
        ])
    );
}

#[tokio::test]
async fn should_reject_student_without_email() {
    let server = test_server().await;

    let resp = server.post("/api/alunos").json(&json!({"nome": "Ana"})).await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn should_reject_duplicate_student_email() {
    let server = test_server().await;
    server
        .post("/api/alunos")
        .json(&ana())
        .await
        .assert_status(StatusCode::CREATED);

    let resp = server
        .post("/api/alunos")
        .json(&json!({"nome": "Ana Clara", "email": "ana@escola.com"}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "DUPLICATE_KEY");
    let list: Value = server.get("/api/alunos").await.json();
    assert_eq!(list, json!([{"id": 1, "nome": "Ana", "email": "ana@escola.com"}]));
}

#[tokio::test]
async fn should_delete_student_and_then_return_404() {
    let server = test_server().await;
    server.post("/api/alunos").json(&ana()).await;

    let resp = server.delete("/api/alunos/1").await;
    resp.assert_status(StatusCode::NO_CONTENT);
    assert!(resp.as_bytes().is_empty());

    let resp = server.get("/api/alunos/1").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["kind"], "STUDENT_NOT_FOUND");
}

#[tokio::test]
async fn should_never_reuse_ids_after_delete() {
    let server = test_server().await;
    server.post("/api/alunos").json(&ana()).await;
    server
        .post("/api/alunos")
        .json(&json!({"nome": "Bruno", "email": "bruno@escola.com"}))
        .await;
    server
        .delete("/api/alunos/2")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let resp = server
        .post("/api/alunos")
        .json(&json!({"nome": "Caio", "email": "caio@escola.com"}))
        .await;

    resp.assert_status(StatusCode::CREATED);
    assert_eq!(resp.json::<Value>()["id"], 3);
}

#[tokio::test]
async fn should_return_unchanged_student_on_empty_update() {
    let server = test_server().await;
    server.post("/api/alunos").json(&ana()).await;

    let resp = server.put("/api/alunos/1").json(&json!({})).await;

    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({"id": 1, "nome": "Ana", "email": "ana@escola.com"})
    );
}

#[tokio::test]
async fn should_answer_malformed_id_with_json_404() {
    let server = test_server().await;
    server.post("/api/alunos").json(&ana()).await;

    for path in ["/api/alunos/abc", "/api/alunos/3000000000"] {
        let resp = server.get(path).await;
        resp.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(resp.header("content-type"), "application/json");
        let body: Value = resp.json();
        assert_eq!(body["kind"], "NOT_FOUND");
        assert!(body["error"].is_string());
    }
    server
        .put("/api/alunos/abc")
        .json(&json!({"nome": "Ana Souza"}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/api/alunos/abc")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let list: Value = server.get("/api/alunos").await.json();
    assert_eq!(list, json!([{"id": 1, "nome": "Ana", "email": "ana@escola.com"}]));
}
