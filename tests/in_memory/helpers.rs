//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::access::domain::Actor;
use taskdesk::report::services::ReportService;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ChecklistItemDraft, Task},
    services::{CreateTaskRequest, DashboardService, TaskLifecycleService},
};
use taskdesk::user::{
    adapters::memory::InMemoryUserDirectory,
    domain::{Role, UserId, UserProfile},
};

/// Lifecycle service over in-memory adapters.
pub type TestLifecycle =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryUserDirectory, DefaultClock>;

/// All services sharing one task store and one user directory.
pub struct Team {
    pub lifecycle: TestLifecycle,
    pub dashboards: DashboardService<InMemoryTaskRepository, InMemoryUserDirectory>,
    pub reports: ReportService<InMemoryTaskRepository, InMemoryUserDirectory, DefaultClock>,
}

/// Parses a user identifier known to be valid.
///
/// # Panics
///
/// Panics when `raw` is not a valid identifier.
#[must_use]
pub fn uid(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

/// The team lead, the only admin.
#[must_use]
pub fn lead() -> Actor {
    Actor::admin(uid("lead"))
}

/// A member actor.
#[must_use]
pub fn member(raw: &str) -> Actor {
    Actor::member(uid(raw))
}

/// Provides services over a directory of one admin and three members.
#[fixture]
pub fn team() -> Team {
    let profile = |id: &str, name: &str, role: Role| {
        UserProfile::new(uid(id), name, format!("{id}@team.example"), role).expect("valid profile")
    };
    let directory = Arc::new(
        InMemoryUserDirectory::with_users([
            profile("lead", "Lee Lead", Role::Admin),
            profile("alice", "Alice", Role::Member),
            profile("bob", "Bob", Role::Member),
            profile("carol", "Carol", Role::Member),
        ])
        .expect("unique users"),
    );
    let repository = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);

    Team {
        lifecycle: TaskLifecycleService::new(
            Arc::clone(&repository),
            Arc::clone(&directory),
            Arc::clone(&clock),
        ),
        dashboards: DashboardService::new(Arc::clone(&repository), Arc::clone(&directory)),
        reports: ReportService::new(repository, directory, clock),
    }
}

/// Creates a task as the lead with one checklist item per entry of `items`.
///
/// # Errors
///
/// Returns an error if the lifecycle service rejects the request.
pub async fn create_task(
    lifecycle: &TestLifecycle,
    title: &str,
    assignees: &[&str],
    items: &[bool],
) -> Result<Task, eyre::Report> {
    let drafts: Vec<ChecklistItemDraft> = items
        .iter()
        .enumerate()
        .map(|(index, done)| ChecklistItemDraft::new(format!("{title} #{index}")).with_completed(*done))
        .collect();
    let request = CreateTaskRequest::new(title, assignees.iter().copied()).with_checklist(drafts);
    Ok(lifecycle.create_task(&lead(), request).await?)
}
