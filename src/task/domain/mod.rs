//! Domain model for the task board.
//!
//! The task domain models the single `Task` entity, its three-state board
//! status, the partial-update patch, and the status-keyed column grouping,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod columns;
mod error;
mod ids;
mod task;

pub use columns::BoardColumns;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskPatch, TaskStatus};
