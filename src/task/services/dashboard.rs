//! Dashboard aggregates over the task store.

use crate::access::{
    domain::{Actor, AdminAction},
    services::AuthorizationGuard,
};
use crate::task::{
    domain::{Task, TaskStatus},
    ports::{TaskFilter, TaskRepository},
    services::{
        lifecycle::TaskLifecycleResult,
        summary::{CompletionRate, PriorityBreakdown, StatusBreakdown, count_by_status},
    },
};
use crate::user::{
    domain::{Role, UserId, UserProfile},
    ports::UserDirectory,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Number of recent tasks shown on dashboards.
pub const RECENT_TASK_LIMIT: usize = 5;

/// Team-wide totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    /// Every task in the store.
    pub total_tasks: usize,
    /// Users holding the member role.
    pub total_users: usize,
    /// Tasks per status.
    pub tasks_by_status: StatusBreakdown,
    /// Tasks per priority.
    pub tasks_by_priority: PriorityBreakdown,
}

/// Reference to a member in aggregate output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRef {
    /// Member identifier.
    pub id: UserId,
    /// Member display name.
    pub name: String,
}

/// Assigned and completed task counts for one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPerformance {
    /// The member.
    pub user: MemberRef,
    /// Tasks assigned to the member.
    pub total_tasks: usize,
    /// Assigned tasks that are completed.
    pub completed_tasks: usize,
}

/// Admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDashboard {
    /// Team-wide totals.
    pub summary: TeamSummary,
    /// Per-member performance, ordered by member name.
    pub user_performance: Vec<MemberPerformance>,
    /// Most recently created tasks.
    pub recent_tasks: Vec<Task>,
}

/// Totals over the tasks assigned to one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    /// Assigned tasks.
    pub total_tasks: usize,
    /// Assigned tasks per status.
    pub tasks_by_status: StatusBreakdown,
    /// Assigned tasks per priority.
    pub tasks_by_priority: PriorityBreakdown,
    /// Share of assigned tasks that are completed.
    pub completion_rate: CompletionRate,
}

/// Personal dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDashboard {
    /// Totals over assigned tasks.
    pub summary: MemberSummary,
    /// Most recently created assigned tasks.
    pub recent_tasks: Vec<Task>,
}

/// A member with per-status counts of their assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWorkload {
    /// The member profile.
    #[serde(flatten)]
    pub user: UserProfile,
    /// Assigned pending tasks.
    pub pending_tasks: usize,
    /// Assigned in-progress tasks.
    pub in_progress_tasks: usize,
    /// Assigned completed tasks.
    pub completed_tasks: usize,
}

/// Read-only aggregation service for dashboards.
pub struct DashboardService<R, U>
where
    R: TaskRepository + ?Sized,
    U: UserDirectory + ?Sized,
{
    repository: Arc<R>,
    directory: Arc<U>,
}

impl<R, U> Clone for DashboardService<R, U>
where
    R: TaskRepository + ?Sized,
    U: UserDirectory + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<R, U> DashboardService<R, U>
where
    R: TaskRepository + ?Sized,
    U: UserDirectory + ?Sized,
{
    /// Creates a dashboard service.
    #[must_use]
    pub const fn new(repository: Arc<R>, directory: Arc<U>) -> Self {
        Self {
            repository,
            directory,
        }
    }

    /// Builds the team-wide dashboard. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for members and
    /// repository or directory errors when lookups fail.
    #[instrument(skip(self, actor), fields(actor = %actor.id()))]
    pub async fn team_dashboard(&self, actor: &Actor) -> TaskLifecycleResult<TeamDashboard> {
        AuthorizationGuard::authorize_admin(actor, AdminAction::ViewTeamDashboard)?;

        let tasks = self.repository.list(&TaskFilter::new()).await?;
        let members = self.directory.list_by_role(Role::Member).await?;

        let user_performance = members
            .iter()
            .map(|member| {
                let assigned: Vec<&Task> = tasks
                    .iter()
                    .filter(|task| task.is_assigned_to(member.id()))
                    .collect();
                MemberPerformance {
                    user: MemberRef {
                        id: member.id().clone(),
                        name: member.name().to_owned(),
                    },
                    total_tasks: assigned.len(),
                    completed_tasks: assigned
                        .iter()
                        .filter(|task| task.status() == TaskStatus::Completed)
                        .count(),
                }
            })
            .collect();

        Ok(TeamDashboard {
            summary: TeamSummary {
                total_tasks: tasks.len(),
                total_users: members.len(),
                tasks_by_status: StatusBreakdown::tally(&tasks),
                tasks_by_priority: PriorityBreakdown::tally(&tasks),
            },
            user_performance,
            recent_tasks: tasks.into_iter().take(RECENT_TASK_LIMIT).collect(),
        })
    }

    /// Builds the dashboard over the actor's assigned tasks.
    ///
    /// # Errors
    ///
    /// Returns repository errors when lookup fails.
    #[instrument(skip(self, actor), fields(actor = %actor.id()))]
    pub async fn member_dashboard(&self, actor: &Actor) -> TaskLifecycleResult<MemberDashboard> {
        let filter = TaskFilter::new().with_assignee(actor.id().clone());
        let tasks = self.repository.list(&filter).await?;
        let tasks_by_status = StatusBreakdown::tally(&tasks);

        Ok(MemberDashboard {
            summary: MemberSummary {
                total_tasks: tasks.len(),
                tasks_by_status,
                tasks_by_priority: PriorityBreakdown::tally(&tasks),
                completion_rate: CompletionRate::from_counts(
                    tasks_by_status.completed,
                    tasks.len(),
                ),
            },
            recent_tasks: tasks.into_iter().take(RECENT_TASK_LIMIT).collect(),
        })
    }

    /// Lists every member with per-status counts of assigned tasks. Admin
    /// only.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for members and
    /// repository or directory errors when lookups fail.
    #[instrument(skip(self, actor), fields(actor = %actor.id()))]
    pub async fn member_workloads(&self, actor: &Actor) -> TaskLifecycleResult<Vec<MemberWorkload>> {
        AuthorizationGuard::authorize_admin(actor, AdminAction::ListMembers)?;

        let members = self.directory.list_by_role(Role::Member).await?;
        let mut workloads = Vec::with_capacity(members.len());
        for member in members {
            let scope = TaskFilter::new().with_assignee(member.id().clone());
            let counts = count_by_status(&*self.repository, &scope).await?;
            workloads.push(MemberWorkload {
                user: member,
                pending_tasks: counts.pending,
                in_progress_tasks: counts.in_progress,
                completed_tasks: counts.completed,
            });
        }
        Ok(workloads)
    }
}
