use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use escola_core::extract::{JsonBody, PathId};
use escola_core::serde::present;

use crate::domain::types::ClassGroup;
use crate::error::RegistryError;
use crate::state::AppState;
use crate::usecase::class_group::{
    CreateClassGroupInput, CreateClassGroupUseCase, DeleteClassGroupUseCase,
    GetClassGroupUseCase, ListClassGroupsUseCase, UpdateClassGroupInput,
    UpdateClassGroupUseCase,
};

#[derive(Deserialize)]
pub struct ClassGroupRequest {
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub descricao: Option<Option<String>>,
}

#[derive(Serialize)]
pub struct ClassGroupResponse {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
}

impl From<ClassGroup> for ClassGroupResponse {
    fn from(class_group: ClassGroup) -> Self {
        Self {
            id: class_group.id,
            nome: class_group.name,
            descricao: class_group.description,
        }
    }
}

// ── POST /api/turmas ─────────────────────────────────────────────────────────

pub async fn create_class_group(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ClassGroupRequest>,
) -> Result<(StatusCode, Json<ClassGroupResponse>), RegistryError> {
    let usecase = CreateClassGroupUseCase {
        repo: state.class_group_repo(),
    };
    let class_group = usecase
        .execute(CreateClassGroupInput {
            name: body.nome,
            description: body.descricao.flatten(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(class_group.into())))
}

// ── GET /api/turmas ──────────────────────────────────────────────────────────

pub async fn list_class_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassGroupResponse>>, RegistryError> {
    let usecase = ListClassGroupsUseCase {
        repo: state.class_group_repo(),
    };
    let class_groups = usecase.execute().await?;
    Ok(Json(class_groups.into_iter().map(Into::into).collect()))
}

// ── GET /api/turmas/{id} ─────────────────────────────────────────────────────

pub async fn get_class_group(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> Result<Json<ClassGroupResponse>, RegistryError> {
    let usecase = GetClassGroupUseCase {
        repo: state.class_group_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /api/turmas/{id} ─────────────────────────────────────────────────────

pub async fn update_class_group(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
    JsonBody(body): JsonBody<ClassGroupRequest>,
) -> Result<Json<ClassGroupResponse>, RegistryError> {
    let usecase = UpdateClassGroupUseCase {
        repo: state.class_group_repo(),
    };
    let class_group = usecase
        .execute(
            id,
            UpdateClassGroupInput {
                name: body.nome,
                description: body.descricao,
            },
        )
        .await?;
    Ok(Json(class_group.into()))
}

// ── DELETE /api/turmas/{id} ──────────────────────────────────────────────────

pub async fn delete_class_group(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> Result<StatusCode, RegistryError> {
    let usecase = DeleteClassGroupUseCase {
        repo: state.class_group_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
