use axum::{Router, routing::get};

use escola_core::health::health_route;
use escola_core::middleware::with_common_layers;

use crate::handlers::{
    class_group::{
        create_class_group, delete_class_group, get_class_group, list_class_groups,
        update_class_group,
    },
    student::{create_student, delete_student, get_student, list_students, update_student},
    teacher::{create_teacher, delete_teacher, get_teacher, list_teachers, update_teacher},
};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "gerenciamento";

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", health_route(SERVICE_NAME))
        // Students
        .route("/alunos", get(list_students).post(create_student))
        .route(
            "/alunos/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        // Teachers
        .route("/professores", get(list_teachers).post(create_teacher))
        .route(
            "/professores/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
        // Class groups
        .route("/turmas", get(list_class_groups).post(create_class_group))
        .route(
            "/turmas/{id}",
            get(get_class_group)
                .put(update_class_group)
                .delete(delete_class_group),
        )
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", health_route(SERVICE_NAME))
        .nest("/api", api_routes())
        .with_state(state);
    with_common_layers(router)
}
