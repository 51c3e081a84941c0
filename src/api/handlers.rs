//! Task API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiError;
use crate::task::{
    domain::{BoardColumns, Task, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskBoardService, UpdateTaskRequest},
};

/// Create task request body.
///
/// The title is optional at the wire level so a missing field reaches the
/// service and fails with the canonical validation message instead of a
/// deserialization rejection. Unknown fields (a caller-supplied status,
/// say) are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateTaskBody {
    /// Task title; required, validated by the service.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional task description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Update task request body; any subset of the three fields.
///
/// The doubly optional description distinguishes an absent field (leave
/// untouched) from an explicit `null` (clear the stored value).
#[derive(Debug, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, when supplied.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description; explicit `null` clears it.
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    /// Replacement status as its raw wire string.
    #[serde(default)]
    pub status: Option<String>,
}

/// Delete acknowledgment body.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Fixed acknowledgment message.
    pub message: String,
}

/// Serde bridge keeping `Option<Option<T>>` faithful to JSON: absent stays
/// `None`, `null` becomes `Some(None)`.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// Shared handler state: the board service behind an `Arc`.
pub type SharedService<R, C> = Arc<TaskBoardService<R, C>>;

/// `POST /api/tasks`: creates a task in the `To Do` column.
///
/// # Errors
///
/// Returns 400 with `Title is required` for a missing or blank title and
/// 500 on store failure.
pub async fn create_task<R, C>(
    State(service): State<SharedService<R, C>>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let mut request = CreateTaskRequest::new(body.title.unwrap_or_default());
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let task = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /api/tasks`: returns the board grouped by status.
///
/// # Errors
///
/// Returns 500 on store failure.
pub async fn list_tasks<R, C>(
    State(service): State<SharedService<R, C>>,
) -> Result<Json<BoardColumns>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let columns = service.board().await?;
    Ok(Json(columns))
}

/// `PUT /api/tasks/{id}`: applies a partial update.
///
/// # Errors
///
/// Returns 404 for an unknown or malformed id, 400 for an invalid status
/// or blank title, and 500 on store failure.
pub async fn update_task<R, C>(
    State(service): State<SharedService<R, C>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let mut request = UpdateTaskRequest::new(resolve_id(&id)?);
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }
    let task = service.update(request).await?;
    Ok(Json(task))
}

/// `DELETE /api/tasks/{id}`: removes a task.
///
/// # Errors
///
/// Returns 404 for an unknown or malformed id and 500 on store failure.
pub async fn delete_task<R, C>(
    State(service): State<SharedService<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service.delete(resolve_id(&id)?).await?;
    Ok(Json(DeleteResponse {
        message: "Task deleted successfully".to_owned(),
    }))
}

/// Parses the path id, folding malformed values into not-found.
///
/// The original backend let malformed ids fall through to a store miss, so
/// the wire contract is 404 either way; a stricter 400 would change only
/// this seam.
fn resolve_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::parse(raw).ok_or(ApiError::NotFound)
}
