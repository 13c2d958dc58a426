//! Error types for task domain validation and parsing.

use super::{ChecklistItemId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task has no assignees.
    #[error("a task must be assigned to at least one user")]
    NoAssignees,

    /// A checklist item has empty text.
    #[error("checklist item at position {position} has empty text")]
    EmptyChecklistText {
        /// Zero-based position of the offending item.
        position: usize,
    },

    /// Two checklist items share an identifier.
    #[error("duplicate checklist item identifier: {0}")]
    DuplicateChecklistItem(ChecklistItemId),

    /// The checklist item does not exist on the task.
    #[error("checklist item {item_id} not found on task {task_id}")]
    ChecklistItemNotFound {
        /// Task that was searched.
        task_id: TaskId,
        /// Missing checklist item.
        item_id: ChecklistItemId,
    },

    /// A progress value outside `0..=100`.
    #[error("progress {0} is outside 0..=100")]
    InvalidProgress(u8),
}

impl TaskDomainError {
    /// Returns `true` when the error reports a missing entity rather than
    /// malformed input.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ChecklistItemNotFound { .. })
    }
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
