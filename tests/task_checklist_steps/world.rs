//! Shared world state for checklist progress BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::access::domain::Actor;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ChecklistItemId, Task},
    services::TaskLifecycleService,
};
use taskdesk::user::{
    adapters::memory::InMemoryUserDirectory,
    domain::{Role, UserId, UserProfile},
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryUserDirectory, DefaultClock>;

/// Scenario world for checklist behaviour tests.
pub struct ChecklistWorld {
    pub service: TestTaskService,
    pub task: Option<Task>,
}

impl ChecklistWorld {
    /// Creates a world with a lead admin and two members.
    ///
    /// # Panics
    ///
    /// Panics if the seeded users are rejected.
    #[must_use]
    pub fn new() -> Self {
        let profile = |id: &str, role: Role| {
            UserId::new(id)
                .and_then(|user_id| {
                    UserProfile::new(user_id, id, format!("{id}@team.example"), role)
                })
                .expect("valid seeded profile")
        };
        let directory = InMemoryUserDirectory::with_users([
            profile("lead", Role::Admin),
            profile("alice", Role::Member),
            profile("bob", Role::Member),
        ])
        .expect("unique seeded users");

        Self {
            service: TaskLifecycleService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(directory),
                Arc::new(DefaultClock),
            ),
            task: None,
        }
    }

    /// Returns the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns the identifier of the checklist item at 1-based `position`.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no task or no such item.
    pub fn item_at(&self, position: usize) -> Result<ChecklistItemId, eyre::Report> {
        let index = position
            .checked_sub(1)
            .ok_or_else(|| eyre::eyre!("checklist positions start at 1"))?;
        self.task()?
            .todo_checklist()
            .get(index)
            .map(|item| item.id())
            .ok_or_else(|| eyre::eyre!("no checklist item at position {position}"))
    }
}

impl Default for ChecklistWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ChecklistWorld {
    ChecklistWorld::default()
}

/// Resolves a scenario user name to an actor; `lead` is the admin.
///
/// # Errors
///
/// Returns an error when the name is not a valid user identifier.
pub fn actor(name: &str) -> Result<Actor, eyre::Report> {
    let id = UserId::new(name)?;
    Ok(if name == "lead" {
        Actor::admin(id)
    } else {
        Actor::member(id)
    })
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
