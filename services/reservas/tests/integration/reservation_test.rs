use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{server_for, test_server};

#[tokio::test]
async fn should_answer_health() {
    let (server, _registry) = test_server().await;

    let resp = server.get("/health").await;

    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({"status": "ok", "service": "reservas"})
    );
}

#[tokio::test]
async fn should_create_reservations_with_increasing_ids() {
    let (server, _registry) = test_server().await;

    let first = server
        .post("/reservas")
        .json(&json!({"aluno_id": 3, "turma_id": 1}))
        .await;
    let second = server
        .post("/reservas")
        .json(&json!({"aluno_id": 2, "turma_id": 1}))
        .await;

    first.assert_status(StatusCode::CREATED);
    second.assert_status(StatusCode::CREATED);
    assert_eq!(first.json::<Value>(), json!({"id": 1, "aluno_id": 3, "turma_id": 1}));
    assert_eq!(second.json::<Value>()["id"], 2);
    assert_eq!(
        server.get("/reservas").await.json::<Value>(),
        json!([
            {"id": 1, "aluno_id": 3, "turma_id": 1},
            {"id": 2, "aluno_id": 2, "turma_id": 1}
        ])
    );
}

#[tokio::test]
async fn should_reject_unknown_student_with_single_lookup() {
    let (server, registry) = test_server().await;

    let resp = server
        .post("/reservas")
        .json(&json!({"aluno_id": 50, "turma_id": 1}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "REFERENCE_NOT_FOUND");
    assert_eq!(body["error"], "student 50 not found");
    assert_eq!(registry.hits(), 1);
    assert_eq!(server.get("/reservas").await.json::<Value>(), json!([]));
}

#[tokio::test]
async fn should_reject_unknown_class_group() {
    let (server, _registry) = test_server().await;

    let resp = server
        .post("/reservas")
        .json(&json!({"aluno_id": 1, "turma_id": 9}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["error"], "class group 9 not found");
}

#[tokio::test]
async fn should_reject_mistyped_id() {
    let (server, registry) = test_server().await;

    let resp = server
        .post("/reservas")
        .json(&json!({"aluno_id": "três", "turma_id": 1}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "VALIDATION_FAILED");
    assert_eq!(registry.hits(), 0);
}

#[tokio::test]
async fn should_return_503_when_registry_is_unreachable() {
    // Nothing listens on port 9 on the loopback interface.
    let server = server_for("http://127.0.0.1:9/api");

    let resp = server
        .post("/reservas")
        .json(&json!({"aluno_id": 1, "turma_id": 1}))
        .await;

    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.json::<Value>()["kind"], "UPSTREAM_UNAVAILABLE");
    assert_eq!(server.get("/reservas").await.json::<Value>(), json!([]));
}
