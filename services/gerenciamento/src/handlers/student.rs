use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use escola_core::extract::{JsonBody, PathId};

use crate::domain::types::Student;
use crate::error::RegistryError;
use crate::state::AppState;
use crate::usecase::student::{
    CreateStudentInput, CreateStudentUseCase, DeleteStudentUseCase, GetStudentUseCase,
    ListStudentsUseCase, UpdateStudentInput, UpdateStudentUseCase,
};

/// Body of `POST /api/alunos` and `PUT /api/alunos/{id}`.
/// Every field is optional on the wire; the use case decides what is required.
#[derive(Deserialize)]
pub struct StudentRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct StudentResponse {
    pub id: i32,
    pub nome: String,
    pub email: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            nome: student.name,
            email: student.email,
        }
    }
}

// ── POST /api/alunos ─────────────────────────────────────────────────────────

pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<StudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), RegistryError> {
    let usecase = CreateStudentUseCase {
        repo: state.student_repo(),
    };
    let student = usecase
        .execute(CreateStudentInput {
            name: body.nome,
            email: body.email,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

// ── GET /api/alunos ──────────────────────────────────────────────────────────

pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, RegistryError> {
    let usecase = ListStudentsUseCase {
        repo: state.student_repo(),
    };
    let students = usecase.execute().await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

// ── GET /api/alunos/{id} ─────────────────────────────────────────────────────

pub async fn get_student(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> Result<Json<StudentResponse>, RegistryError> {
    let usecase = GetStudentUseCase {
        repo: state.student_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /api/alunos/{id} ─────────────────────────────────────────────────────

pub async fn update_student(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
    JsonBody(body): JsonBody<StudentRequest>,
) -> Result<Json<StudentResponse>, RegistryError> {
    let usecase = UpdateStudentUseCase {
        repo: state.student_repo(),
    };
    let student = usecase
        .execute(
            id,
            UpdateStudentInput {
                name: body.nome,
                email: body.email,
            },
        )
        .await?;
    Ok(Json(student.into()))
}

// ── DELETE /api/alunos/{id} ──────────────────────────────────────────────────

pub async fn delete_student(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> Result<StatusCode, RegistryError> {
    let usecase = DeleteStudentUseCase {
        repo: state.student_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
