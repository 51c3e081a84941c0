//! In-process adapter implementing the board API port directly over the
//! board service, with no HTTP in between. Used by tests and
//! single-process setups.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

use crate::board::ports::{BoardApi, BoardApiError, BoardApiResult};
use crate::task::{
    domain::{BoardColumns, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, TaskBoardError, TaskBoardService, UpdateTaskRequest},
};

/// Board API adapter that calls the service in-process.
#[derive(Clone)]
pub struct LocalBoardApi<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: Arc<TaskBoardService<R, C>>,
}

impl<R, C> LocalBoardApi<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates an adapter over the given service.
    #[must_use]
    pub const fn new(service: Arc<TaskBoardService<R, C>>) -> Self {
        Self { service }
    }
}

/// Maps service failures onto the client error taxonomy, mirroring the
/// HTTP status mapping so both adapters look alike to the cache.
fn to_api_error(err: TaskBoardError) -> BoardApiError {
    match err {
        TaskBoardError::Domain(domain) => BoardApiError::Rejected {
            status: 400,
            message: domain.to_string(),
        },
        TaskBoardError::Repository(TaskRepositoryError::NotFound(_)) => BoardApiError::Rejected {
            status: 404,
            message: "Task not found".to_owned(),
        },
        TaskBoardError::Repository(repository) => BoardApiError::transport(repository),
    }
}

#[async_trait]
impl<R, C> BoardApi for LocalBoardApi<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    async fn list_all(&self) -> BoardApiResult<BoardColumns> {
        self.service.board().await.map_err(to_api_error)
    }

    async fn create(&self, title: String, description: Option<String>) -> BoardApiResult<Task> {
        let mut request = CreateTaskRequest::new(title);
        if let Some(description) = description {
            request = request.with_description(description);
        }
        self.service.create(request).await.map_err(to_api_error)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> BoardApiResult<Task> {
        let mut request = UpdateTaskRequest::new(id);
        if let Some(title) = patch.title {
            request = request.with_title(title.as_str());
        }
        if let Some(description) = patch.description {
            request = request.with_description(description);
        }
        if let Some(status) = patch.status {
            request = request.with_status(status.as_str());
        }
        self.service.update(request).await.map_err(to_api_error)
    }

    async fn delete(&self, id: TaskId) -> BoardApiResult<()> {
        self.service.delete(id).await.map_err(to_api_error)
    }
}
