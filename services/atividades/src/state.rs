use escola_registry_client::HttpRegistryClient;

use crate::infra::memory::InMemoryActivityStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub activities: InMemoryActivityStore,
    pub registry: HttpRegistryClient,
}
