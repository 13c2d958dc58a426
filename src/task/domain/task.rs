//! Task aggregate root and the progress/status recompute rule.

use super::{
    Assignees, ChecklistItem, ChecklistItemDraft, ChecklistItemId, NewTask, Priority, Progress,
    TaskDomainError, TaskFieldEdit, TaskId, TaskStatus,
    checklist::{build_checklist, checklist_progress, completed_count},
};
use crate::user::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::Serialize;

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    priority: Priority,
    status: TaskStatus,
    progress: Progress,
    due_date: Option<NaiveDate>,
    assigned_to: Assignees,
    created_by: UserId,
    todo_checklist: Vec<ChecklistItem>,
    attachments: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    revision: u64,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted progress.
    pub progress: Progress,
    /// Persisted due date.
    pub due_date: Option<NaiveDate>,
    /// Persisted assignees.
    pub assigned_to: Assignees,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted checklist.
    pub todo_checklist: Vec<ChecklistItem>,
    /// Persisted attachment references.
    pub attachments: Vec<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted storage revision.
    pub revision: u64,
}

impl Task {
    /// Creates a new task on behalf of `created_by`.
    ///
    /// Progress and status are derived from the supplied checklist; an empty
    /// checklist yields a pending task at 0%.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`], [`TaskDomainError::NoAssignees`]
    /// or a checklist validation error when the input is malformed.
    pub fn create(
        new_task: NewTask,
        created_by: UserId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let NewTask {
            title,
            description,
            priority,
            due_date,
            assigned_to,
            attachments,
            todo_checklist,
        } = new_task;

        let normalized_title = normalize_title(&title)?;
        let assignees = Assignees::new(assigned_to)?;
        let checklist = build_checklist(todo_checklist)?;

        let timestamp = clock.utc();
        let mut task = Self {
            id: TaskId::new(),
            title: normalized_title,
            description,
            priority,
            status: TaskStatus::Pending,
            progress: Progress::ZERO,
            due_date,
            assigned_to: assignees,
            created_by,
            todo_checklist: checklist,
            attachments,
            created_at: timestamp,
            updated_at: timestamp,
            revision: 0,
        };
        task.recompute();
        Ok(task)
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            progress: data.progress,
            due_date: data.due_date,
            assigned_to: data.assigned_to,
            created_by: data.created_by,
            todo_checklist: data.todo_checklist,
            attachments: data.attachments,
            created_at: data.created_at,
            updated_at: data.updated_at,
            revision: data.revision,
        }
    }

    /// Returns a copy carrying the given storage revision.
    ///
    /// Intended for repository adapters that assign revisions on write.
    #[must_use]
    pub fn with_revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the progress.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the assignees.
    #[must_use]
    pub const fn assigned_to(&self) -> &Assignees {
        &self.assigned_to
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns the checklist in order.
    #[must_use]
    pub fn todo_checklist(&self) -> &[ChecklistItem] {
        &self.todo_checklist
    }

    /// Returns the attachment references.
    #[must_use]
    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the storage revision.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` when `user` is among the assignees.
    #[must_use]
    pub fn is_assigned_to(&self, user: &UserId) -> bool {
        self.assigned_to.contains(user)
    }

    /// Returns the assignees followed by the creator.
    pub fn referenced_users(&self) -> impl Iterator<Item = &UserId> {
        self.assigned_to
            .iter()
            .chain(std::iter::once(&self.created_by))
    }

    /// Returns the number of completed checklist items.
    #[must_use]
    pub fn completed_checklist_count(&self) -> usize {
        completed_count(&self.todo_checklist)
    }

    /// Applies a partial field edit.
    ///
    /// Every supplied field is validated before any is written. Replacing the
    /// checklist triggers the recompute rule.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a supplied field is malformed; the
    /// task is left untouched in that case.
    pub fn apply_field_edit(
        &mut self,
        edit: TaskFieldEdit,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let TaskFieldEdit {
            title,
            description,
            priority,
            due_date,
            assigned_to,
            attachments,
            todo_checklist,
        } = edit;

        let validated_title = title.as_deref().map(normalize_title).transpose()?;
        let validated_assignees = assigned_to.map(Assignees::new).transpose()?;
        let validated_checklist = todo_checklist.map(build_checklist).transpose()?;

        if let Some(value) = validated_title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = Some(value);
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = due_date {
            self.due_date = Some(value);
        }
        if let Some(value) = validated_assignees {
            self.assigned_to = value;
        }
        if let Some(value) = attachments {
            self.attachments = value;
        }
        if let Some(items) = validated_checklist {
            self.todo_checklist = items;
            self.recompute();
        }
        self.touch(clock);
        Ok(())
    }

    /// Sets the status explicitly.
    ///
    /// Setting [`TaskStatus::Completed`] marks every checklist item done and
    /// forces progress to 100%. Any other status is stored as given and
    /// leaves progress and the checklist untouched.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        if status == TaskStatus::Completed {
            for item in &mut self.todo_checklist {
                item.set_completed(true);
            }
            self.progress = Progress::COMPLETE;
        }
        self.status = status;
        self.touch(clock);
    }

    /// Marks a single checklist item done or not, then recomputes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ChecklistItemNotFound`] when no item has
    /// the given identifier.
    pub fn set_checklist_item(
        &mut self,
        item_id: ChecklistItemId,
        completed: bool,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let task_id = self.id;
        let item = self
            .todo_checklist
            .iter_mut()
            .find(|candidate| candidate.id() == item_id)
            .ok_or(TaskDomainError::ChecklistItemNotFound { task_id, item_id })?;
        item.set_completed(completed);
        self.recompute();
        self.touch(clock);
        Ok(())
    }

    /// Replaces the whole checklist, then recomputes.
    ///
    /// # Errors
    ///
    /// Returns a checklist validation error when an item is malformed; the
    /// task is left untouched in that case.
    pub fn replace_checklist(
        &mut self,
        items: Vec<ChecklistItemDraft>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.todo_checklist = build_checklist(items)?;
        self.recompute();
        self.touch(clock);
        Ok(())
    }

    /// Derives progress from the checklist and status from progress.
    ///
    /// An empty checklist keeps the current progress.
    fn recompute(&mut self) {
        if let Some(progress) = checklist_progress(&self.todo_checklist) {
            self.progress = progress;
        }
        self.status = TaskStatus::from_progress(self.progress);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Trims a title and rejects blank values.
fn normalize_title(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
