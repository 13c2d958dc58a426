//! Parameter objects for creating and editing tasks.

use super::{ChecklistItemDraft, Priority};
use crate::user::domain::UserId;
use chrono::NaiveDate;

/// Fields supplied when creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Task priority.
    pub priority: Priority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Users the task is assigned to.
    pub assigned_to: Vec<UserId>,
    /// Opaque attachment references.
    pub attachments: Vec<String>,
    /// Initial checklist.
    pub todo_checklist: Vec<ChecklistItemDraft>,
}

/// Partial update of task fields.
///
/// `None` leaves the corresponding attribute untouched; it never clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFieldEdit {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement due date.
    pub due_date: Option<NaiveDate>,
    /// Replacement assignees.
    pub assigned_to: Option<Vec<UserId>>,
    /// Replacement attachments.
    pub attachments: Option<Vec<String>>,
    /// Replacement checklist.
    pub todo_checklist: Option<Vec<ChecklistItemDraft>>,
}
