use axum::{Router, routing::get};

use escola_core::health::health_route;
use escola_core::middleware::with_common_layers;

use crate::handlers::reservation::{create_reservation, list_reservations};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "reservas";

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", health_route(SERVICE_NAME))
        .route("/reservas", get(list_reservations).post(create_reservation))
        .with_state(state);
    with_common_layers(router)
}
