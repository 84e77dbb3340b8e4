use axum::Json;
use axum::routing::{MethodRouter, get};
use serde::Serialize;

/// Liveness payload returned by `GET /health`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthStatus {
    pub fn ok(service: &'static str) -> Self {
        Self {
            status: "ok",
            service,
        }
    }
}

/// Route for `GET /health`. Liveness only: no dependency is checked.
pub fn health_route<S>(service: &'static str) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get(move || async move { Json(HealthStatus::ok(service)) })
}
