//! Client-side port over the task API.

use crate::task::domain::{BoardColumns, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board API operations.
pub type BoardApiResult<T> = Result<T, BoardApiError>;

/// Contract the board client speaks to the server through.
///
/// Every call is a single-outcome round-trip: it resolves exactly once,
/// with the server's record or a failure. No streaming, no retries.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Fetches the whole board grouped by status.
    async fn list_all(&self) -> BoardApiResult<BoardColumns>;

    /// Creates a task; the server forces it into the `To Do` column.
    async fn create(&self, title: String, description: Option<String>) -> BoardApiResult<Task>;

    /// Applies a partial update to the task with the given id.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> BoardApiResult<Task>;

    /// Deletes the task with the given id.
    async fn delete(&self, id: TaskId) -> BoardApiResult<()>;
}

/// Errors surfaced by board API adapters.
#[derive(Debug, Clone, Error)]
pub enum BoardApiError {
    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code equivalent.
        status: u16,
        /// Server-provided failure message.
        message: String,
    },

    /// The request never completed (network or protocol failure).
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardApiError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
