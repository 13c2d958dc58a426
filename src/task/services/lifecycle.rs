//! Service layer for authorized task lifecycle operations.
//!
//! Every operation follows the same sequence: load the task, authorize the
//! actor, apply the domain change, then persist with the revision that was
//! loaded so concurrent writers are detected rather than overwritten.

use crate::access::{
    domain::{AccessDenied, Actor, AdminAction, TaskOperation},
    services::AuthorizationGuard,
};
use crate::error::ErrorKind;
use crate::task::{
    domain::{
        ChecklistItemDraft, ChecklistItemId, NewTask, ParsePriorityError, ParseTaskStatusError,
        Priority, Task, TaskDomainError, TaskFieldEdit, TaskId, TaskStatus,
    },
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
    services::{summary::count_by_status, view::TaskView},
};
use crate::user::{
    domain::{UserDomainError, UserId},
    ports::{UserDirectory, UserDirectoryError},
    services::resolve_profiles,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<NaiveDate>,
    assigned_to: Vec<String>,
    attachments: Vec<String>,
    todo_checklist: Vec<ChecklistItemDraft>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        assigned_to: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
            assigned_to: assigned_to.into_iter().map(Into::into).collect(),
            attachments: Vec::new(),
            todo_checklist: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority by name.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets attachment references.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = String>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Sets the initial checklist.
    #[must_use]
    pub fn with_checklist(mut self, items: impl IntoIterator<Item = ChecklistItemDraft>) -> Self {
        self.todo_checklist = items.into_iter().collect();
        self
    }

    fn into_new_task(self) -> TaskLifecycleResult<NewTask> {
        Ok(NewTask {
            title: self.title,
            description: self.description,
            priority: parse_priority(self.priority.as_deref())?.unwrap_or_default(),
            due_date: self.due_date,
            assigned_to: parse_user_ids(self.assigned_to)?,
            attachments: self.attachments,
            todo_checklist: self.todo_checklist,
        })
    }
}

/// Request payload for a partial task edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<NaiveDate>,
    assigned_to: Option<Vec<String>>,
    attachments: Option<Vec<String>>,
    todo_checklist: Option<Vec<ChecklistItemDraft>>,
}

impl UpdateTaskRequest {
    /// Creates an edit that changes nothing yet.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
            priority: None,
            due_date: None,
            assigned_to: None,
            attachments: None,
            todo_checklist: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority by name.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the assignees.
    #[must_use]
    pub fn with_assignees(mut self, assigned_to: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.assigned_to = Some(assigned_to.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the attachment references.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = String>) -> Self {
        self.attachments = Some(attachments.into_iter().collect());
        self
    }

    /// Replaces the checklist.
    #[must_use]
    pub fn with_checklist(mut self, items: impl IntoIterator<Item = ChecklistItemDraft>) -> Self {
        self.todo_checklist = Some(items.into_iter().collect());
        self
    }

    fn into_edit(self) -> TaskLifecycleResult<TaskFieldEdit> {
        Ok(TaskFieldEdit {
            title: self.title,
            description: self.description,
            priority: parse_priority(self.priority.as_deref())?,
            due_date: self.due_date,
            assigned_to: self.assigned_to.map(parse_user_ids).transpose()?,
            attachments: self.attachments,
            todo_checklist: self.todo_checklist,
        })
    }
}

/// Request payload for an explicit status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    task_id: TaskId,
    status: String,
}

impl UpdateStatusRequest {
    /// Creates a status change request.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
        }
    }
}

/// Request payload for toggling one checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateChecklistItemRequest {
    task_id: TaskId,
    item_id: ChecklistItemId,
    completed: bool,
}

impl UpdateChecklistItemRequest {
    /// Creates a checklist item update request.
    #[must_use]
    pub const fn new(task_id: TaskId, item_id: ChecklistItemId, completed: bool) -> Self {
        Self {
            task_id,
            item_id,
            completed,
        }
    }
}

/// A task together with its completed checklist count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListEntry {
    /// The task.
    #[serde(flatten)]
    pub task: Task,
    /// Number of completed checklist items.
    pub completed_checklist_count: usize,
}

/// Per-status totals over every task visible to the actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    /// All visible tasks.
    pub all: usize,
    /// Visible pending tasks.
    pub pending: usize,
    /// Visible in-progress tasks.
    pub in_progress: usize,
    /// Visible completed tasks.
    pub completed: usize,
}

/// Result of listing tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListing {
    /// Matching tasks, newest first.
    pub tasks: Vec<TaskListEntry>,
    /// Totals ignoring the status filter.
    pub status_summary: StatusSummary,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// A user identifier was malformed.
    #[error(transparent)]
    InvalidUser(#[from] UserDomainError),
    /// The status string is unknown.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The priority string is unknown.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),
    /// An assignee does not exist in the user directory.
    #[error("unknown assignee: {0}")]
    UnknownAssignee(UserId),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The actor may not perform the operation.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// User directory lookup failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

impl TaskLifecycleError {
    /// Classifies the error for reporting.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) if err.is_not_found() => ErrorKind::NotFound,
            Self::Domain(_)
            | Self::InvalidUser(_)
            | Self::InvalidStatus(_)
            | Self::InvalidPriority(_)
            | Self::UnknownAssignee(_) => ErrorKind::Validation,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Repository(
                TaskRepositoryError::Conflict { .. } | TaskRepositoryError::DuplicateTask(_),
            ) => ErrorKind::Conflict,
            Self::Repository(TaskRepositoryError::Persistence(_)) | Self::Directory(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, U, C>
where
    R: TaskRepository + ?Sized,
    U: UserDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> Clone for TaskLifecycleService<R, U, C>
where
    R: TaskRepository + ?Sized,
    U: UserDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            directory: Arc::clone(&self.directory),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, U, C> TaskLifecycleService<R, U, C>
where
    R: TaskRepository + ?Sized,
    U: UserDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, directory: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            clock,
        }
    }

    /// Creates a task. Only admins may create tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] for non-admins, a validation
    /// error when the title, assignees or checklist are malformed, and
    /// [`TaskLifecycleError::UnknownAssignee`] when an assignee is not in the
    /// user directory. No task is stored on error.
    #[instrument(skip(self, actor, request), fields(actor = %actor.id()))]
    pub async fn create_task(
        &self,
        actor: &Actor,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        AuthorizationGuard::authorize_admin(actor, AdminAction::CreateTask)?;
        let new_task = request.into_new_task()?;
        self.ensure_known_users(&new_task.assigned_to).await?;

        let task = Task::create(new_task, actor.id().clone(), &*self.clock)?;
        let stored = self.repository.store(&task).await?;
        info!(task_id = %stored.id(), "task created");
        Ok(stored)
    }

    /// Retrieves a task the actor may read.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Forbidden`] when a member is not assigned.
    pub async fn get_task(&self, actor: &Actor, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let task = self.load(task_id).await?;
        AuthorizationGuard::authorize(actor, &task, TaskOperation::Read)?;
        Ok(task)
    }

    /// Lists tasks visible to the actor, optionally narrowed by status. A
    /// blank status applies no filter.
    ///
    /// Admins see every task; members see the tasks assigned to them. The
    /// status summary covers every visible task regardless of the status
    /// filter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for an unknown status and
    /// [`TaskLifecycleError::Repository`] when lookup fails.
    #[instrument(skip(self, actor), fields(actor = %actor.id()))]
    pub async fn list_tasks(
        &self,
        actor: &Actor,
        status: Option<&str>,
    ) -> TaskLifecycleResult<TaskListing> {
        let status_filter = status
            .filter(|value| !value.trim().is_empty())
            .map(TaskStatus::try_from)
            .transpose()?;
        let scope = visibility_scope(actor);

        let listing_filter = match status_filter {
            Some(value) => scope.clone().with_status(value),
            None => scope.clone(),
        };
        let tasks = self
            .repository
            .list(&listing_filter)
            .await?
            .into_iter()
            .map(|task| TaskListEntry {
                completed_checklist_count: task.completed_checklist_count(),
                task,
            })
            .collect();

        let counts = count_by_status(&*self.repository, &scope).await?;
        let status_summary = StatusSummary {
            all: self.repository.count(&scope).await?,
            pending: counts.pending,
            in_progress: counts.in_progress,
            completed: counts.completed,
        };

        Ok(TaskListing {
            tasks,
            status_summary,
        })
    }

    /// Applies a partial field edit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`], [`TaskLifecycleError::Forbidden`],
    /// a validation error, or a repository conflict when the task changed
    /// since it was loaded.
    #[instrument(skip(self, actor, request), fields(actor = %actor.id(), task_id = %request.task_id))]
    pub async fn update_task(
        &self,
        actor: &Actor,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(request.task_id).await?;
        AuthorizationGuard::authorize(actor, &task, TaskOperation::UpdateFields)?;

        let edit = request.into_edit()?;
        if let Some(assignees) = &edit.assigned_to {
            self.ensure_known_users(assignees).await?;
        }
        let expected_revision = task.revision();
        task.apply_field_edit(edit, &*self.clock)?;
        self.persist(&task, expected_revision).await
    }

    /// Changes the task status explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`], [`TaskLifecycleError::Forbidden`],
    /// [`TaskLifecycleError::InvalidStatus`], or a repository conflict.
    #[instrument(skip(self, actor, request), fields(actor = %actor.id(), task_id = %request.task_id))]
    pub async fn update_status(
        &self,
        actor: &Actor,
        request: UpdateStatusRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(request.task_id).await?;
        AuthorizationGuard::authorize(actor, &task, TaskOperation::UpdateStatus)?;

        let status = TaskStatus::try_from(request.status.as_str())?;
        let expected_revision = task.revision();
        task.set_status(status, &*self.clock);
        self.persist(&task, expected_revision).await
    }

    /// Marks one checklist item done or not.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`], [`TaskLifecycleError::Forbidden`],
    /// [`TaskDomainError::ChecklistItemNotFound`] wrapped in
    /// [`TaskLifecycleError::Domain`], or a repository conflict.
    #[instrument(skip(self, actor, request), fields(actor = %actor.id(), task_id = %request.task_id))]
    pub async fn update_checklist_item(
        &self,
        actor: &Actor,
        request: UpdateChecklistItemRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(request.task_id).await?;
        AuthorizationGuard::authorize(actor, &task, TaskOperation::UpdateChecklist)?;

        let expected_revision = task.revision();
        task.set_checklist_item(request.item_id, request.completed, &*self.clock)?;
        self.persist(&task, expected_revision).await
    }

    /// Replaces the whole checklist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`], [`TaskLifecycleError::Forbidden`],
    /// a checklist validation error, or a repository conflict.
    #[instrument(skip(self, actor, items), fields(actor = %actor.id()))]
    pub async fn replace_checklist(
        &self,
        actor: &Actor,
        task_id: TaskId,
        items: Vec<ChecklistItemDraft>,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(task_id).await?;
        AuthorizationGuard::authorize(actor, &task, TaskOperation::UpdateChecklist)?;

        let expected_revision = task.revision();
        task.replace_checklist(items, &*self.clock)?;
        self.persist(&task, expected_revision).await
    }

    /// Deletes a task. Only admins may delete tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or
    /// [`TaskLifecycleError::Forbidden`].
    #[instrument(skip(self, actor), fields(actor = %actor.id()))]
    pub async fn delete_task(&self, actor: &Actor, task_id: TaskId) -> TaskLifecycleResult<()> {
        let task = self.load(task_id).await?;
        AuthorizationGuard::authorize(actor, &task, TaskOperation::Delete)?;
        self.repository.delete(task_id).await?;
        info!(%task_id, "task deleted");
        Ok(())
    }

    /// Expands the users referenced by `task` into summaries.
    ///
    /// Users missing from the directory are summarized by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Directory`] when lookup fails.
    pub async fn present(&self, task: &Task) -> TaskLifecycleResult<TaskView> {
        let profiles = resolve_profiles(&*self.directory, task.referenced_users()).await?;
        Ok(TaskView::build(task, &profiles))
    }

    /// Expands the users referenced by each task, looking each user up once.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Directory`] when lookup fails.
    pub async fn present_all(&self, tasks: &[Task]) -> TaskLifecycleResult<Vec<TaskView>> {
        let referenced: Vec<&UserId> = tasks.iter().flat_map(Task::referenced_users).collect();
        let profiles = resolve_profiles(&*self.directory, referenced).await?;
        Ok(tasks
            .iter()
            .map(|task| TaskView::build(task, &profiles))
            .collect())
    }

    async fn load(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    async fn persist(&self, task: &Task, expected_revision: u64) -> TaskLifecycleResult<Task> {
        let stored = self.repository.update(task, expected_revision).await?;
        debug!(
            task_id = %stored.id(),
            status = %stored.status(),
            progress = stored.progress().value(),
            revision = stored.revision(),
            "task updated"
        );
        Ok(stored)
    }

    async fn ensure_known_users(&self, users: &[UserId]) -> TaskLifecycleResult<()> {
        for user in users {
            if self.directory.find_by_id(user).await?.is_none() {
                return Err(TaskLifecycleError::UnknownAssignee(user.clone()));
            }
        }
        Ok(())
    }
}

/// Tasks an actor may see: all of them for admins, assigned ones otherwise.
fn visibility_scope(actor: &Actor) -> TaskFilter {
    if actor.is_admin() {
        TaskFilter::new()
    } else {
        TaskFilter::new().with_assignee(actor.id().clone())
    }
}

fn parse_priority(raw: Option<&str>) -> TaskLifecycleResult<Option<Priority>> {
    Ok(raw.map(Priority::try_from).transpose()?)
}

fn parse_user_ids(raw: Vec<String>) -> TaskLifecycleResult<Vec<UserId>> {
    raw.into_iter()
        .map(|value| UserId::new(value).map_err(TaskLifecycleError::from))
        .collect()
}
