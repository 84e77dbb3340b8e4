use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Build the JSON error response every escola service returns:
/// `{"error": <message>, "kind": <KIND>}`.
///
/// Logging is left to the caller: each service logs its own internal errors
/// with the full cause before building the response.
pub fn error_response(status: StatusCode, kind: &'static str, message: String) -> Response {
    let body = serde_json::json!({
        "error": message,
        "kind": kind,
    });
    (status, axum::Json(body)).into_response()
}
