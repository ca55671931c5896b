use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use eventcal_core::event::EventError;
use eventcal_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors returned by the HTTP handlers.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    /// The request could not be parsed or broke a business rule.
    BadRequest(String),
    /// The event store rejected the operation.
    Repository(RepositoryError),
    /// Anything else.
    Internal(anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Repository(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Repository(err) => err.to_string(),
            AppError::Internal(err) => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Application error");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}
