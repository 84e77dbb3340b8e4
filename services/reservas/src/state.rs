use escola_registry_client::HttpRegistryClient;

use crate::infra::memory::InMemoryReservationStore;

#[derive(Clone)]
pub struct AppState {
    pub reservations: InMemoryReservationStore,
    pub registry: HttpRegistryClient,
}
