//! HTTP error mapping for the task API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::task::{ports::TaskRepositoryError, services::TaskBoardError};

/// Error body returned for every non-success response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub error: String,
}

/// API-surface errors with their HTTP status mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Bad or missing input; surfaces the validation message verbatim.
    Validation(String),
    /// The id did not resolve to a record. Malformed ids take this path
    /// too, preserving the original wire behaviour.
    NotFound,
    /// Store or infrastructure failure; detail is logged, never returned.
    Internal,
}

impl From<TaskBoardError> for ApiError {
    fn from(err: TaskBoardError) -> Self {
        match err {
            TaskBoardError::Domain(domain) => Self::Validation(domain.to_string()),
            TaskBoardError::Repository(TaskRepositoryError::NotFound(_)) => Self::NotFound,
            TaskBoardError::Repository(repository) => {
                tracing::error!(error = %repository, "task store failure");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound => (StatusCode::NOT_FOUND, "Task not found".to_owned()),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_owned(),
            ),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
