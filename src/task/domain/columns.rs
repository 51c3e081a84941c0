//! Status-keyed board grouping shared by the list endpoint and the client
//! cache.

use super::{Task, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// The three board columns, each an ordered task sequence.
///
/// Serializes to `{"To Do": [...], "In Progress": [...], "Done": [...]}`;
/// all three keys are always present, so an empty board still renders three
/// empty columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumns {
    #[serde(rename = "To Do")]
    to_do: Vec<Task>,
    #[serde(rename = "In Progress")]
    in_progress: Vec<Task>,
    #[serde(rename = "Done")]
    done: Vec<Task>,
}

impl BoardColumns {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            to_do: Vec::new(),
            in_progress: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Groups tasks into columns, preserving the input order within each
    /// column. Callers supply tasks ordered by creation time.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut columns = Self::new();
        for task in tasks {
            columns.push(task);
        }
        columns
    }

    /// Returns the tasks in the given column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::ToDo => &self.to_do,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::ToDo => &mut self.to_do,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Appends a task to the column matching its status.
    pub fn push(&mut self, task: Task) {
        self.column_mut(task.status()).push(task);
    }

    /// Finds a task by identifier, scanning all columns.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        TaskStatus::ALL
            .iter()
            .flat_map(|status| self.column(*status))
            .find(|task| task.id() == id)
    }

    /// Removes and returns the task with the given identifier, wherever it
    /// sits. Returns `None` when no column holds it.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        for status in TaskStatus::ALL {
            let column = self.column_mut(status);
            if let Some(position) = column.iter().position(|task| task.id() == id) {
                return Some(column.remove(position));
            }
        }
        None
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_do.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns `true` when every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
