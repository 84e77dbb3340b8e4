use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{server_for, spawn_registry};

#[tokio::test]
async fn should_reserve_against_live_registry() {
    let (registry_url, registry) = spawn_registry().await;
    let turma = registry.post("/api/turmas").json(&json!({"nome": "7A"})).await;
    turma.assert_status(StatusCode::CREATED);
    assert_eq!(turma.json::<Value>()["id"], 1);
    let aluno = registry
        .post("/api/alunos")
        .json(&json!({"nome": "Ana", "email": "ana@escola.com"}))
        .await;
    assert_eq!(aluno.json::<Value>()["id"], 1);

    let server = server_for(&registry_url);

    let resp = server
        .post("/reservas")
        .json(&json!({"aluno_id": 1, "turma_id": 1}))
        .await;
    resp.assert_status(StatusCode::CREATED);
    assert_eq!(resp.json::<Value>(), json!({"id": 1, "aluno_id": 1, "turma_id": 1}));

    let resp = server
        .post("/reservas")
        .json(&json!({"aluno_id": 1, "turma_id": 1}))
        .await;
    assert_eq!(resp.json::<Value>()["id"], 2);

    let resp = server
        .post("/reservas")
        .json(&json!({"aluno_id": 2, "turma_id": 1}))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["error"], "student 2 not found");
}

#[tokio::test]
async fn should_reject_deleted_class_group() {
    let (registry_url, registry) = spawn_registry().await;
    registry
        .post("/api/alunos")
        .json(&json!({"nome": "Ana", "email": "ana@escola.com"}))
        .await;
    registry.post("/api/turmas").json(&json!({"nome": "7A"})).await;
    registry
        .delete("/api/turmas/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let server = server_for(&registry_url);

    let resp = server
        .post("/reservas")
        .json(&json!({"aluno_id": 1, "turma_id": 1}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["error"], "class group 1 not found");
}
