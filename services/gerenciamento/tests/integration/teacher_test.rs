use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{carlos, test_server};

#[tokio::test]
async fn should_create_teacher_with_assigned_id() {
    let server = test_server().await;

    let resp = server.post("/api/professores").json(&carlos()).await;

    resp.assert_status(StatusCode::CREATED);
    let body: Value = resp.json();
    assert_eq!(
        body,
        json!({
            "id": 1,
            "nome": "Carlos Almeida",
            "idade": 40,
            "email": "carlos@escola.com",
            "materia": "História",
            "observacoes": null
        })
    );
}

#[tokio::test]
async fn should_reject_duplicate_teacher_email() {
    let server = test_server().await;
    server
        .post("/api/professores")
        .json(&carlos())
        .await
        .assert_status(StatusCode::CREATED);

    let resp = server.post("/api/professores").json(&carlos()).await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert!(body["error"].is_string());
    assert_eq!(body["kind"], "DUPLICATE_KEY");

    let list: Value = server.get("/api/professores").await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_teacher_without_subject() {
    let server = test_server().await;

    let resp = server
        .post("/api/professores")
        .json(&json!({"nome": "Sem Matéria", "idade": 30, "email": "x@escola.com"}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert_eq!(body["error"], "missing or empty field `materia`");
}

#[tokio::test]
async fn should_reject_mistyped_age() {
    let server = test_server().await;

    let resp = server
        .post("/api/professores")
        .json(&json!({
            "nome": "Carlos Almeida",
            "idade": "quarenta",
            "email": "carlos@escola.com",
            "materia": "História"
        }))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn should_preserve_unspecified_fields_on_update() {
    let server = test_server().await;
    server
        .post("/api/professores")
        .json(&json!({
            "nome": "Carlos Almeida",
            "idade": 40,
            "email": "carlos@escola.com",
            "materia": "História",
            "observacoes": "coordenador"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let resp = server
        .put("/api/professores/1")
        .json(&json!({"materia": "Geografia"}))
        .await;

    resp.assert_status_ok();
    let expected = json!({
        "id": 1,
        "nome": "Carlos Almeida",
        "idade": 40,
        "email": "carlos@escola.com",
        "materia": "Geografia",
        "observacoes": "coordenador"
    });
    assert_eq!(resp.json::<Value>(), expected);
    assert_eq!(
        server.get("/api/professores/1").await.json::<Value>(),
        expected
    );
}

#[tokio::test]
async fn should_reject_update_to_another_teachers_email() {
    let server = test_server().await;
    server.post("/api/professores").json(&carlos()).await;
    server
        .post("/api/professores")
        .json(&json!({
            "nome": "Beatriz Lima",
            "idade": 35,
            "email": "beatriz@escola.com",
            "materia": "Matemática"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let resp = server
        .put("/api/professores/2")
        .json(&json!({"email": "carlos@escola.com"}))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "DUPLICATE_KEY");
    let beatriz: Value = server.get("/api/professores/2").await.json();
    assert_eq!(beatriz["email"], "beatriz@escola.com");
}

#[tokio::test]
async fn should_return_404_for_unknown_teacher() {
    let server = test_server().await;

    server
        .get("/api/professores/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .put("/api/professores/999")
        .json(&json!({"nome": "Ninguém"}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/api/professores/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let list: Value = server.get("/api/professores").await.json();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn should_clear_notes_when_sent_null_or_blank() {
    let server = test_server().await;
    for (id, notes) in [(1, json!(null)), (2, json!(""))] {
        server
            .post("/api/professores")
            .json(&json!({
                "nome": "Carlos Almeida",
                "idade": 40,
                "email": format!("carlos{id}@escola.com"),
                "materia": "História",
                "observacoes": "coordenador"
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let resp = server
            .put(&format!("/api/professores/{id}"))
            .json(&json!({"observacoes": notes}))
            .await;

        resp.assert_status_ok();
        assert_eq!(resp.json::<Value>()["observacoes"], Value::Null);
        let stored: Value = server.get(&format!("/api/professores/{id}")).await.json();
        assert_eq!(stored["observacoes"], Value::Null);
        assert_eq!(stored["materia"], "História");
    }
}

#[tokio::test]
async fn should_answer_malformed_teacher_id_with_json_404() {
    let server = test_server().await;

    let resp = server.get("/api/professores/um").await;

    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["kind"], "NOT_FOUND");
}
