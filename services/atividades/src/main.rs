use tracing::info;

use escola_atividades::config::ActivityConfig;
use escola_atividades::infra::memory::InMemoryActivityStore;
use escola_atividades::router::build_router;
use escola_atividades::state::AppState;
use escola_core::tracing::init_tracing;
use escola_registry_client::HttpRegistryClient;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ActivityConfig::from_env();

    let registry = HttpRegistryClient::new(
        &config.registry_url,
        config.registry_timeout,
        config.registry_retries,
    )
    .expect("failed to build registry client");
    info!(registry_url = %registry.base_url(), "registry client ready");

    let router = build_router(AppState {
        activities: InMemoryActivityStore::new(),
        registry,
    });
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("atividades service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
