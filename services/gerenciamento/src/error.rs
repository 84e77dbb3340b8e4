use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use escola_core::error::error_response;
use escola_domain::field::FieldError;

/// Registry service error variants.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),
    #[error("email already registered")]
    DuplicateEmail,
    #[error("student not found")]
    StudentNotFound,
    #[error("teacher not found")]
    TeacherNotFound,
    #[error("class group not found")]
    ClassGroupNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RegistryError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidField(_) => "VALIDATION_FAILED",
            Self::DuplicateEmail => "DUPLICATE_KEY",
            Self::StudentNotFound => "STUDENT_NOT_FOUND",
            Self::TeacherNotFound => "TEACHER_NOT_FOUND",
            Self::ClassGroupNotFound => "CLASS_GROUP_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidField(_) | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::StudentNotFound | Self::TeacherNotFound | Self::ClassGroupNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        // Log 500s only; tower-http TraceLayer already records method/uri/status for all
        // requests. Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}
