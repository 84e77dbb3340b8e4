use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::test_server;

#[tokio::test]
async fn should_create_class_group_with_id_one() {
    let server = test_server().await;

    let resp = server.post("/api/turmas").json(&json!({"nome": "7A"})).await;

    resp.assert_status(StatusCode::CREATED);
    assert_eq!(
        resp.json::<Value>(),
        json!({"id": 1, "nome": "7A", "descricao": null})
    );
}

#[tokio::test]
async fn should_update_class_group_description_only() {
    let server = test_server().await;
    server
        .post("/api/turmas")
        .json(&json!({"nome": "7A", "descricao": "manhã"}))
        .await;

    let resp = server
        .put("/api/turmas/1")
        .json(&json!({"descricao": "tarde"}))
        .await;

    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({"id": 1, "nome": "7A", "descricao": "tarde"})
    );
}

#[tokio::test]
async fn should_clear_description_when_sent_null() {
    let server = test_server().await;
    server
        .post("/api/turmas")
        .json(&json!({"nome": "7A", "descricao": "manhã"}))
        .await;

    let resp = server
        .put("/api/turmas/1")
        .json(&json!({"descricao": null}))
        .await;

    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({"id": 1, "nome": "7A", "descricao": null})
    );
}

#[tokio::test]
async fn should_reject_class_group_without_name() {
    let server = test_server().await;

    let resp = server
        .post("/api/turmas")
        .json(&json!({"descricao": "sem nome"}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let list: Value = server.get("/api/turmas").await.json();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn should_delete_class_group() {
    let server = test_server().await;
    server.post("/api/turmas").json(&json!({"nome": "7A"})).await;

    server
        .delete("/api/turmas/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let resp = server.get("/api/turmas/1").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["kind"], "CLASS_GROUP_NOT_FOUND");
    server
        .delete("/api/turmas/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
