//! Drag-gesture reconciliation between the board UI and the task cache.
//!
//! The drag layer hands over raw string identifiers for both the dragged
//! card and the drop target. Everything is normalized here, at the seam,
//! into the canonical [`TaskId`] and [`TaskStatus`] types; internal logic
//! never compares mismatched representations.

use crate::task::domain::{BoardColumns, Task, TaskId, TaskStatus};

/// Gesture state: idle, or dragging a resolved task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    Idle,
    /// A card is being dragged.
    Dragging {
        /// Identifier of the dragged task.
        active: TaskId,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Outcome of ending a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DropOutcome {
    /// No valid drop target, or the gesture never resolved a task.
    Cancelled,
    /// Dropped onto the column the task already sits in.
    NoChange,
    /// Dropped onto a different column; the caller feeds this to the
    /// cache's update.
    Move {
        /// Identifier of the dragged task.
        id: TaskId,
        /// Destination status group.
        to: TaskStatus,
    },
}

/// Tracks one drag gesture and the overlay mirroring the dragged card.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
    overlay: Option<Task>,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
            overlay: None,
        }
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Returns the task mirrored by the drag overlay, if a gesture is in
    /// progress.
    #[must_use]
    pub const fn overlay(&self) -> Option<&Task> {
        self.overlay.as_ref()
    }

    /// Starts a gesture from a raw drag-layer identifier.
    ///
    /// The identifier is normalized to a [`TaskId`] and resolved by
    /// scanning all columns. Returns `true` when a task was found; an
    /// unresolvable identifier leaves the controller idle.
    pub fn begin(&mut self, raw_id: &str, columns: &BoardColumns) -> bool {
        let found = normalize_task_id(raw_id).and_then(|id| columns.find(id));
        match found {
            Some(task) => {
                self.state = DragState::Dragging { active: task.id() };
                self.overlay = Some(task.clone());
                true
            }
            None => {
                self.reset();
                false
            }
        }
    }

    /// Ends the gesture with an optional raw drop target.
    ///
    /// The overlay and gesture state are cleared unconditionally. A missing
    /// or unparseable target cancels; a target equal to the task's current
    /// column is an explicit no-change; anything else names the move.
    pub fn drop_on(&mut self, raw_target: Option<&str>, columns: &BoardColumns) -> DropOutcome {
        let state = self.state;
        self.reset();

        let DragState::Dragging { active } = state else {
            return DropOutcome::Cancelled;
        };
        let Some(target) = raw_target.and_then(normalize_status) else {
            return DropOutcome::Cancelled;
        };
        // The task may have vanished between drag start and drop (e.g. a
        // refresh replaced the cache); treat that as a cancelled gesture.
        let Some(task) = columns.find(active) else {
            return DropOutcome::Cancelled;
        };
        if task.status() == target {
            return DropOutcome::NoChange;
        }
        DropOutcome::Move { id: active, to: target }
    }

    /// Cancels the gesture, clearing the overlay.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state = DragState::Idle;
        self.overlay = None;
    }
}

/// Normalizes a raw drag-layer identifier into the canonical [`TaskId`].
///
/// Tolerates surrounding whitespace and every UUID textual form; anything
/// else (including bare numbers) is not a task identifier.
#[must_use]
pub fn normalize_task_id(raw: &str) -> Option<TaskId> {
    TaskId::parse(raw)
}

/// Normalizes a raw drop-target identifier into a status group.
#[must_use]
pub fn normalize_status(raw: &str) -> Option<TaskStatus> {
    TaskStatus::try_from(raw.trim()).ok()
}
