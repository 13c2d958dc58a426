//! Repository port for task persistence and filtered lookup.

use crate::task::domain::{Priority, Task, TaskId, TaskStatus};
use crate::user::domain::UserId;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations serialize concurrent writes to the same task through the
/// revision check in [`TaskRepository::update`].
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task.
    ///
    /// The write succeeds only when the stored revision equals
    /// `expected_revision`; the stored copy then carries the next revision
    /// and is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or [`TaskRepositoryError::Conflict`] when another write got there
    /// first.
    async fn update(&self, task: &Task, expected_revision: u64) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns tasks matching `filter`, newest first.
    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts tasks matching `filter`.
    async fn count(&self, filter: &TaskFilter) -> TaskRepositoryResult<usize>;
}

/// Conjunctive task filter. Unset criteria match every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<Priority>,
    assigned_to: Option<UserId>,
    due_on_or_after: Option<NaiveDate>,
    due_on_or_before: Option<NaiveDate>,
}

impl TaskFilter {
    /// Creates a filter matching every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to tasks with the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts to tasks assigned to `user`.
    #[must_use]
    pub fn with_assignee(mut self, user: UserId) -> Self {
        self.assigned_to = Some(user);
        self
    }

    /// Restricts to tasks due within the inclusive range. Tasks without a due
    /// date never match a range bound.
    #[must_use]
    pub const fn with_due_between(
        mut self,
        on_or_after: Option<NaiveDate>,
        on_or_before: Option<NaiveDate>,
    ) -> Self {
        self.due_on_or_after = on_or_after;
        self.due_on_or_before = on_or_before;
        self
    }

    /// Returns the status criterion.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the assignee criterion.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<&UserId> {
        self.assigned_to.as_ref()
    }

    /// Returns `true` when `task` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let status_matches = self.status.is_none_or(|status| task.status() == status);
        let priority_matches = self
            .priority
            .is_none_or(|priority| task.priority() == priority);
        let assignee_matches = self
            .assigned_to
            .as_ref()
            .is_none_or(|user| task.is_assigned_to(user));
        let after_matches = self
            .due_on_or_after
            .is_none_or(|bound| task.due_date().is_some_and(|due| due >= bound));
        let before_matches = self
            .due_on_or_before
            .is_none_or(|bound| task.due_date().is_some_and(|due| due <= bound));
        status_matches && priority_matches && assignee_matches && after_matches && before_matches
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored revision differs from the one the write was based on.
    #[error("task {task_id} was modified concurrently (expected revision {expected}, found {actual})")]
    Conflict {
        /// Task being written.
        task_id: TaskId,
        /// Revision the caller read.
        expected: u64,
        /// Revision currently stored.
        actual: u64,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
