use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::error_response;

/// `axum::Json` with a uniform rejection: any body that is not valid JSON for `T`
/// (missing content type, syntax error, wrong field type) becomes a 400
/// `VALIDATION_FAILED` instead of axum's plain-text 415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(JsonBodyRejection))]
pub struct JsonBody<T>(pub T);

#[derive(Debug)]
pub struct JsonBodyRejection(JsonRejection);

impl From<JsonRejection> for JsonBodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        error_response(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            self.0.body_text(),
        )
    }
}

/// `axum::extract::Path` for entity ids. A segment that does not parse as `T`
/// (`/alunos/abc`, an out-of-range number) can name no stored entity, so it is
/// answered with a JSON 404 `NOT_FOUND`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(PathIdRejection))]
pub struct PathId<T>(pub T);

#[derive(Debug)]
pub struct PathIdRejection(PathRejection);

impl From<PathRejection> for PathIdRejection {
    fn from(rejection: PathRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for PathIdRejection {
    fn into_response(self) -> Response {
        error_response(StatusCode::NOT_FOUND, "NOT_FOUND", self.0.body_text())
    }
}
