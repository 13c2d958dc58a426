//! Admin-only export of task and user reports.

use crate::access::{
    domain::{AccessDenied, Actor, AdminAction},
    services::AuthorizationGuard,
};
use crate::error::ErrorKind;
use crate::report::domain::{Report, TaskReportRow, UserReportRow};
use crate::task::{
    domain::Task,
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
    services::{CompletionRate, StatusBreakdown},
};
use crate::user::{
    domain::{Role, UserId, UserProfile},
    ports::{UserDirectory, UserDirectoryError},
    services::resolve_profiles,
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Errors returned while exporting reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The actor is not an admin.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    /// Task lookup failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// User lookup failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

impl ReportError {
    /// Classifies the error for transport mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Repository(_) | Self::Directory(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for report exports.
pub type ReportResult<T> = Result<T, ReportError>;

/// Builds report rows from the task store and user directory.
pub struct ReportService<R, U, C>
where
    R: TaskRepository + ?Sized,
    U: UserDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> Clone for ReportService<R, U, C>
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

impl<R, U, C> ReportService<R, U, C>
where
    R: TaskRepository + ?Sized,
    U: UserDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a report service.
    #[must_use]
    pub const fn new(repository: Arc<R>, directory: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            clock,
        }
    }

    /// Exports one row per task, newest first.
    ///
    /// Assignee and creator identifiers that no longer resolve are reported
    /// by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Forbidden`] for members and lookup errors when
    /// the store or directory fails.
    #[instrument(skip(self, actor), fields(actor = %actor.id()))]
    pub async fn export_tasks(&self, actor: &Actor) -> ReportResult<Report<TaskReportRow>> {
        AuthorizationGuard::authorize_admin(actor, AdminAction::ExportReports)?;

        let tasks = self.repository.list(&TaskFilter::new()).await?;
        let referenced: Vec<&UserId> = tasks.iter().flat_map(Task::referenced_users).collect();
        let profiles = resolve_profiles(&*self.directory, referenced).await?;

        let rows: Vec<TaskReportRow> = tasks
            .iter()
            .map(|task| task_row(task, &profiles))
            .collect();
        info!(rows = rows.len(), "exported task report");
        Ok(Report {
            name: self.report_name("tasks"),
            headers: TaskReportRow::HEADERS.to_vec(),
            rows,
        })
    }

    /// Exports one row per member with assigned-task counts.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Forbidden`] for members and lookup errors when
    /// the store or directory fails.
    #[instrument(skip(self, actor), fields(actor = %actor.id()))]
    pub async fn export_users(&self, actor: &Actor) -> ReportResult<Report<UserReportRow>> {
        AuthorizationGuard::authorize_admin(actor, AdminAction::ExportReports)?;

        let tasks = self.repository.list(&TaskFilter::new()).await?;
        let members = self.directory.list_by_role(Role::Member).await?;

        let rows: Vec<UserReportRow> = members
            .iter()
            .map(|member| {
                let counts = StatusBreakdown::tally(
                    tasks.iter().filter(|task| task.is_assigned_to(member.id())),
                );
                let total = counts.total();
                UserReportRow {
                    user_id: member.id().to_string(),
                    name: member.name().to_owned(),
                    email: member.email().to_owned(),
                    total_tasks: total,
                    pending_tasks: counts.pending,
                    in_progress_tasks: counts.in_progress,
                    completed_tasks: counts.completed,
                    completion_rate: format!(
                        "{}%",
                        CompletionRate::from_counts(counts.completed, total)
                    ),
                }
            })
            .collect();
        info!(rows = rows.len(), "exported user report");
        Ok(Report {
            name: self.report_name("users"),
            headers: UserReportRow::HEADERS.to_vec(),
            rows,
        })
    }

    fn report_name(&self, subject: &str) -> String {
        format!(
            "{subject}_report_{}",
            self.clock.utc().date_naive().format("%Y-%m-%d")
        )
    }
}

fn task_row(task: &Task, profiles: &HashMap<UserId, UserProfile>) -> TaskReportRow {
    let name_of = |user_id: &UserId| {
        profiles
            .get(user_id)
            .map_or_else(|| user_id.to_string(), |profile| profile.name().to_owned())
    };
    TaskReportRow {
        task_id: task.id().to_string(),
        title: task.title().to_owned(),
        description: task.description().unwrap_or_default().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        due_date: task
            .due_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        assigned_to: task
            .assigned_to()
            .iter()
            .map(name_of)
            .collect::<Vec<_>>()
            .join(", "),
        created_by: name_of(task.created_by()),
        created_at: task.created_at().date_naive().format("%Y-%m-%d").to_string(),
        progress: task.progress().to_string(),
    }
}
