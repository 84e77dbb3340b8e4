use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use escola_core::error::error_response;
use escola_domain::field::FieldError;
use escola_domain::reference::ReferenceError;

/// Activity service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ActivityServiceError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ActivityServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidField(_) => "VALIDATION_FAILED",
            Self::Reference(ReferenceError::NotFound { .. }) => "REFERENCE_NOT_FOUND",
            Self::Reference(ReferenceError::Unavailable { .. }) => "UPSTREAM_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidField(_) | Self::Reference(ReferenceError::NotFound { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::Reference(ReferenceError::Unavailable { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ActivityServiceError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            Self::Reference(e @ ReferenceError::Unavailable { .. }) => {
                tracing::warn!(error = %e, "registry unavailable")
            }
            _ => {}
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}
