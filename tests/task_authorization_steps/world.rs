//! Shared world state for task authorization BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::access::domain::Actor;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use taskdesk::user::{
    adapters::memory::InMemoryUserDirectory,
    domain::{Role, UserId, UserProfile},
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryUserDirectory, DefaultClock>;

/// Scenario world for authorization behaviour tests.
pub struct AuthorizationWorld {
    pub service: TestTaskService,
    pub task_id: Option<TaskId>,
    pub last_outcome: Option<Result<Option<Task>, TaskLifecycleError>>,
}

impl AuthorizationWorld {
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
            task_id: None,
            last_outcome: None,
        }
    }

    /// Returns the identifier of the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task_id
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records an operation outcome, tracking any task it produced.
    pub fn record(&mut self, outcome: Result<Option<Task>, TaskLifecycleError>) {
        if let Ok(Some(task)) = &outcome {
            self.task_id = Some(task.id());
        }
        self.last_outcome = Some(outcome);
    }

    /// Returns the most recent outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when no operation has run.
    pub fn outcome(&self) -> Result<&Result<Option<Task>, TaskLifecycleError>, eyre::Report> {
        self.last_outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing operation outcome"))
    }
}

impl Default for AuthorizationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AuthorizationWorld {
    AuthorizationWorld::default()
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
