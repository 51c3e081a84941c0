//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
///
/// The messages are wire-facing: the HTTP layer surfaces them verbatim in
/// 400 responses, so they must stay stable for board clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("Title is required")]
    EmptyTitle,

    /// The supplied status is outside the enumerated set. Carries the
    /// rejected value for logging; the message enumerates the allowed
    /// values.
    #[error("Status must be one of: To Do, In Progress, Done")]
    InvalidStatus(String),
}

/// Error returned while parsing status values from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
