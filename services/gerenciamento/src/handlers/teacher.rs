use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use escola_core::extract::{JsonBody, PathId};
use escola_core::serde::present;

use crate::domain::types::Teacher;
use crate::error::RegistryError;
use crate::state::AppState;
use crate::usecase::teacher::{
    CreateTeacherInput, CreateTeacherUseCase, DeleteTeacherUseCase, GetTeacherUseCase,
    ListTeachersUseCase, UpdateTeacherInput, UpdateTeacherUseCase,
};

#[derive(Deserialize)]
pub struct TeacherRequest {
    pub nome: Option<String>,
    pub idade: Option<i32>,
    pub email: Option<String>,
    pub materia: Option<String>,
    /// `null` is kept apart from a missing key so an update can clear the notes.
    #[serde(default, deserialize_with = "present")]
    pub observacoes: Option<Option<String>>,
}

#[derive(Serialize)]
pub struct TeacherResponse {
    pub id: i32,
    pub nome: String,
    pub idade: i32,
    pub email: String,
    pub materia: String,
    pub observacoes: Option<String>,
}

impl From<Teacher> for TeacherResponse {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            nome: teacher.name,
            idade: teacher.age,
            email: teacher.email,
            materia: teacher.subject,
            observacoes: teacher.notes,
        }
    }
}

// ── POST /api/professores ────────────────────────────────────────────────────

pub async fn create_teacher(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<TeacherRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>), RegistryError> {
    let usecase = CreateTeacherUseCase {
        repo: state.teacher_repo(),
    };
    let teacher = usecase
        .execute(CreateTeacherInput {
            name: body.nome,
            age: body.idade,
            email: body.email,
            subject: body.materia,
            notes: body.observacoes.flatten(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(teacher.into())))
}

// ── GET /api/professores ─────────────────────────────────────────────────────

pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherResponse>>, RegistryError> {
    let usecase = ListTeachersUseCase {
        repo: state.teacher_repo(),
    };
    let teachers = usecase.execute().await?;
    Ok(Json(teachers.into_iter().map(Into::into).collect()))
}

// ── GET /api/professores/{id} ────────────────────────────────────────────────

pub async fn get_teacher(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> Result<Json<TeacherResponse>, RegistryError> {
    let usecase = GetTeacherUseCase {
        repo: state.teacher_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /api/professores/{id} ────────────────────────────────────────────────

pub async fn update_teacher(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
    JsonBody(body): JsonBody<TeacherRequest>,
) -> Result<Json<TeacherResponse>, RegistryError> {
    let usecase = UpdateTeacherUseCase {
        repo: state.teacher_repo(),
    };
    let teacher = usecase
        .execute(
            id,
            UpdateTeacherInput {
                name: body.nome,
                age: body.idade,
                email: body.email,
                subject: body.materia,
                notes: body.observacoes,
            },
        )
        .await?;
    Ok(Json(teacher.into()))
}

// ── DELETE /api/professores/{id} ─────────────────────────────────────────────

pub async fn delete_teacher(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> Result<StatusCode, RegistryError> {
    let usecase = DeleteTeacherUseCase {
        repo: state.teacher_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
