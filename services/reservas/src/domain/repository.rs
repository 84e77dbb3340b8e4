#![allow(async_fn_in_trait)]

use crate::domain::types::{NewReservation, Reservation};
use crate::error::ReservationServiceError;

pub trait ReservationStore: Send + Sync {
    async fn insert(
        &self,
        reservation: NewReservation,
    ) -> Result<Reservation, ReservationServiceError>;
    async fn list(&self) -> Result<Vec<Reservation>, ReservationServiceError>;
}
