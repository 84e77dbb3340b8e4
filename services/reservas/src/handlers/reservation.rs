use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use escola_core::extract::JsonBody;

use crate::domain::types::Reservation;
use crate::error::ReservationServiceError;
use crate::state::AppState;
use crate::usecase::reservation::{
    CreateReservationInput, CreateReservationUseCase, ListReservationsUseCase,
};

#[derive(Deserialize)]
pub struct ReservationRequest {
    pub aluno_id: Option<i32>,
    pub turma_id: Option<i32>,
}

#[derive(Serialize)]
pub struct ReservationResponse {
    pub id: u64,
    pub aluno_id: i32,
    pub turma_id: i32,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            aluno_id: reservation.student_id,
            turma_id: reservation.class_group_id,
        }
    }
}

// ── POST /reservas ───────────────────────────────────────────────────────────

pub async fn create_reservation(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ReservationServiceError> {
    let usecase = CreateReservationUseCase {
        store: state.reservations,
        registry: state.registry,
    };
    let reservation = usecase
        .execute(CreateReservationInput {
            student_id: body.aluno_id,
            class_group_id: body.turma_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(reservation.into())))
}

// ── GET /reservas ────────────────────────────────────────────────────────────

pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, ReservationServiceError> {
    let usecase = ListReservationsUseCase {
        store: state.reservations,
    };
    let reservations = usecase.execute().await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}
