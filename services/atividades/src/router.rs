use axum::{Router, routing::get};

use escola_core::health::health_route;
use escola_core::middleware::with_common_layers;

use crate::handlers::activity::{create_activity, list_activities};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "atividades";

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", health_route(SERVICE_NAME))
        .route("/atividades", get(list_activities).post(create_activity))
        .with_state(state);
    with_common_layers(router)
}
