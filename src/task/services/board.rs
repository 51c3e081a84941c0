//! Service layer for board CRUD orchestration.

use crate::task::{
    domain::{BoardColumns, Task, TaskDomainError, TaskId, TaskPatch, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Any status supplied by a caller is deliberately absent here: new tasks
/// always start in the `To Do` column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the raw title; validation happens in the
    /// service so a blank title surfaces as a domain error, not a panic.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for a partial task update.
///
/// Raw strings are carried here and validated by the service, so an invalid
/// status or blank title becomes a domain error with the wire-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: Option<String>,
    description: Option<Option<String>>,
    status: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update for the given task.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            status: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description; `None` clears the stored value.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the replacement status as its raw wire string.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the target task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Validates the raw fields into a typed patch.
    fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let mut patch = TaskPatch::new();
        if let Some(raw_title) = self.title {
            patch = patch.with_title(TaskTitle::new(raw_title)?);
        }
        if let Some(description) = self.description {
            patch = patch.with_description(description);
        }
        if let Some(raw_status) = self.status {
            let status = TaskStatus::try_from(raw_status.as_str())
                .map_err(|err| TaskDomainError::InvalidStatus(err.0))?;
            patch = patch.with_status(status);
        }
        Ok(patch)
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task in the `To Do` column.
    ///
    /// Validation precedes persistence: a blank title leaves no record
    /// behind.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the title is missing or
    /// blank after trimming, or [`TaskBoardError::Repository`] when the
    /// store rejects the write.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(title, request.description, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Returns the full board grouped by status.
    ///
    /// All three columns are always present; each is ordered by creation
    /// time ascending.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing fails.
    pub async fn board(&self) -> TaskBoardResult<BoardColumns> {
        let tasks = self.repository.list_all().await?;
        Ok(BoardColumns::from_tasks(tasks))
    }

    /// Applies a partial update and returns the updated record.
    ///
    /// Existence is checked before field validation, so an unknown id
    /// reports not-found even when the patch is also invalid.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the id does
    /// not resolve, or [`TaskBoardError::Domain`] when a supplied status is
    /// outside the enumerated set or a supplied title is blank.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskBoardResult<Task> {
        let id = request.id();
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;

        let patch = request.into_patch()?;
        task.apply(patch, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the id does
    /// not resolve; deleting the same id twice fails the second time.
    pub async fn delete(&self, id: TaskId) -> TaskBoardResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
