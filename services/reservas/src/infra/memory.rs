use escola_core::ledger::Ledger;

use crate::domain::repository::ReservationStore;
use crate::domain::types::{NewReservation, Reservation};
use crate::error::ReservationServiceError;

#[derive(Clone, Default)]
pub struct InMemoryReservationStore {
    ledger: Ledger<Reservation>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationStore for InMemoryReservationStore {
    async fn insert(
        &self,
        reservation: NewReservation,
    ) -> Result<Reservation, ReservationServiceError> {
        Ok(self.ledger.append_with(|id| reservation.with_id(id))?)
    }

    async fn list(&self) -> Result<Vec<Reservation>, ReservationServiceError> {
        Ok(self.ledger.snapshot()?)
    }
}
