use crate::parameter_store::ParameterStoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetAuthError {
    #[error("Secret retrieval failed: {0}")]
    SecretRetrieval(#[from] ParameterStoreError),

    #[error("Malformed request body: {0}")]
    MalformedRequestBody(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl WidgetAuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WidgetAuthError::SecretRetrieval(_) | WidgetAuthError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            WidgetAuthError::MalformedRequestBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Bounded label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetAuthError::SecretRetrieval(_) => "secret_retrieval",
            WidgetAuthError::MalformedRequestBody(_) => "malformed_body",
            WidgetAuthError::Signing(_) => "signing",
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: &'static str,
}

impl IntoResponse for WidgetAuthError {
    // Messages are fixed strings; the inner detail is for server-side logs only.
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            WidgetAuthError::SecretRetrieval(_) => (
                "SECRET_RETRIEVAL_FAILED",
                "Widget configuration is unavailable",
            ),
            WidgetAuthError::MalformedRequestBody(_) => (
                "MALFORMED_REQUEST_BODY",
                "Request body must be valid JSON",
            ),
            WidgetAuthError::Signing(_) => (
                "SIGNING_FAILED",
                "An internal cryptographic error occurred",
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail { code, message },
        };

        (self.status_code(), Json(error_response)).into_response()
    }
}
