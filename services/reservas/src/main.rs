use tracing::info;

use escola_core::tracing::init_tracing;
use escola_registry_client::HttpRegistryClient;
use escola_reservas::config::ReservationConfig;
use escola_reservas::infra::memory::InMemoryReservationStore;
use escola_reservas::router::build_router;
use escola_reservas::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ReservationConfig::from_env();

    let registry = HttpRegistryClient::new(
        &config.registry_url,
        config.registry_timeout,
        config.registry_retries,
    )
    .expect("failed to build registry client");
    info!(registry_url = %registry.base_url(), "registry client ready");

    let router = build_router(AppState {
        reservations: InMemoryReservationStore::new(),
        registry,
    });
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("reservas service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
