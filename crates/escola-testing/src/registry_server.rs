//! Minimal registry stand-in served over real HTTP.
//!
//! Answers `GET /api/{kind}/{id}` with 200 and a small JSON body for known
//! entities, 404 otherwise. Can be told to fail every request with a fixed
//! status or to delay its answers.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use escola_domain::kind::RegistryKind;

#[derive(Default)]
struct MockState {
    known: HashSet<(RegistryKind, i32)>,
    fail_status: Option<u16>,
    delay: Option<Duration>,
    hits: usize,
}

#[derive(Clone)]
pub struct MockRegistryServer {
    state: Arc<Mutex<MockState>>,
    port: u16,
}

impl MockRegistryServer {
    /// Bind 127.0.0.1 on an OS-assigned port and serve in a background task.
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState::default()));
        let router = Router::new()
            .route("/api/{kind}/{id}", get(lookup))
            .with_state(Arc::clone(&state));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock registry");
        let port = listener.local_addr().expect("mock registry addr").port();
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock registry");
        });
        Self { state, port }
    }

    /// Base URL including the `/api` prefix, as dependent services expect.
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/api", self.port)
    }

    pub fn insert(&self, kind: RegistryKind, id: i32) {
        self.state.lock().unwrap().known.insert((kind, id));
    }

    pub fn fail_with(&self, status: u16) {
        self.state.lock().unwrap().fail_status = Some(status);
    }

    pub fn delay_by(&self, delay: Duration) {
        self.state.lock().unwrap().delay = Some(delay);
    }

    /// Number of lookup requests received.
    pub fn hits(&self) -> usize {
        self.state.lock().unwrap().hits
    }
}

async fn lookup(
    State(state): State<Arc<Mutex<MockState>>>,
    Path((kind, id)): Path<(String, i32)>,
) -> Response {
    let (delay, fail_status, found) = {
        let mut s = state.lock().unwrap();
        s.hits += 1;
        let found = RegistryKind::from_path_segment(&kind)
            .is_some_and(|k| s.known.contains(&(k, id)));
        (s.delay, s.fail_status, found)
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(status) = fail_status {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(serde_json::json!({"error": "mock failure"}))).into_response();
    }
    if found {
        (StatusCode::OK, Json(serde_json::json!({"id": id}))).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "not found"})),
        )
            .into_response()
    }
}
