use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use escola_core::extract::JsonBody;

use crate::domain::types::Activity;
use crate::error::ActivityServiceError;
use crate::state::AppState;
use crate::usecase::activity::{
    CreateActivityInput, CreateActivityUseCase, ListActivitiesUseCase,
};

#[derive(Deserialize)]
pub struct ActivityRequest {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub professor_id: Option<i32>,
    pub turma_id: Option<i32>,
}

#[derive(Serialize)]
pub struct ActivityResponse {
    pub id: u64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub professor_id: i32,
    pub turma_id: i32,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            titulo: activity.title,
            descricao: activity.description,
            professor_id: activity.teacher_id,
            turma_id: activity.class_group_id,
        }
    }
}

// ── POST /atividades ─────────────────────────────────────────────────────────

pub async fn create_activity(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), ActivityServiceError> {
    let usecase = CreateActivityUseCase {
        store: state.activities,
        registry: state.registry,
    };
    let activity = usecase
        .execute(CreateActivityInput {
            title: body.titulo,
            description: body.descricao,
            teacher_id: body.professor_id,
            class_group_id: body.turma_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(activity.into())))
}

// ── GET /atividades ──────────────────────────────────────────────────────────

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityResponse>>, ActivityServiceError> {
    let usecase = ListActivitiesUseCase {
        store: state.activities,
    };
    let activities = usecase.execute().await?;
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}
