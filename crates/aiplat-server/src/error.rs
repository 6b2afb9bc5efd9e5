//! Error types for the HTTP gateway.
//!
//! A blocked prompt is not an error; it is a successful response. Errors here
//! cover malformed requests and internal faults.

use aiplat_audit::AuditError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to start the server.
    #[error("failed to start server: {0}")]
    StartupFailed(String),

    /// The request body was rejected before reaching the guardrails.
    #[error("invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },

    /// The audit trail could not be written or read.
    #[error(transparent)]
    Audit(#[from] AuditError),

    /// The completion backend failed.
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            // Missing fields and bad JSON are reported like any validation failure
            StatusCode::BAD_REQUEST => StatusCode::UNPROCESSABLE_ENTITY,
            other => other,
        };
        Self::InvalidRequest {
            status,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::InvalidRequest { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let detail = match &self {
            ServerError::InvalidRequest { message, .. } => message.clone(),
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_status() {
        let response = ServerError::InvalidRequest {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `prompt`".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_internal_errors_are_500() {
        let response = ServerError::Backend("unavailable".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response =
            ServerError::Audit(AuditError::StorageError("poisoned".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
