use escola_domain::field::require;
use escola_domain::kind::RegistryKind;
use escola_domain::reference::{ReferenceValidator, check_references};

use crate::domain::repository::ReservationStore;
use crate::domain::types::{NewReservation, Reservation};
use crate::error::ReservationServiceError;

// ── CreateReservation ────────────────────────────────────────────────────────

pub struct CreateReservationInput {
    pub student_id: Option<i32>,
    pub class_group_id: Option<i32>,
}

/// Student is checked first; the class group lookup only happens when the
/// student exists.
pub struct CreateReservationUseCase<S: ReservationStore, V: ReferenceValidator> {
    pub store: S,
    pub registry: V,
}

impl<S: ReservationStore, V: ReferenceValidator> CreateReservationUseCase<S, V> {
    pub async fn execute(
        &self,
        input: CreateReservationInput,
    ) -> Result<Reservation, ReservationServiceError> {
        let reservation = NewReservation {
            student_id: require("aluno_id", input.student_id)?,
            class_group_id: require("turma_id", input.class_group_id)?,
        };
        check_references(
            &self.registry,
            &[
                (RegistryKind::Student, reservation.student_id),
                (RegistryKind::ClassGroup, reservation.class_group_id),
            ],
        )
        .await?;
        let created = self.store.insert(reservation).await?;
        tracing::info!(
            reservation_id = created.id,
            student_id = created.student_id,
            class_group_id = created.class_group_id,
            "reservation created"
        );
        Ok(created)
    }
}

// ── ListReservations ─────────────────────────────────────────────────────────

pub struct ListReservationsUseCase<S: ReservationStore> {
    pub store: S,
}

impl<S: ReservationStore> ListReservationsUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<Reservation>, ReservationServiceError> {
        self.store.list().await
    }
}
