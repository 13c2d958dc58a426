//! Shared application state handed to every handler.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::access::ports::IdentityProvider;
use crate::report::services::ReportService;
use crate::task::{
    ports::TaskRepository,
    services::{DashboardService, TaskLifecycleService},
};
use crate::user::{ports::UserDirectory, services::UserService};

type DynTasks = dyn TaskRepository;
type DynUsers = dyn UserDirectory;

/// Services and the identity provider behind the router.
pub struct AppState {
    pub(super) tasks: TaskLifecycleService<DynTasks, DynUsers, DefaultClock>,
    pub(super) dashboards: DashboardService<DynTasks, DynUsers>,
    pub(super) reports: ReportService<DynTasks, DynUsers, DefaultClock>,
    pub(super) users: UserService<DynUsers>,
    pub(super) identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Wires the services over the given adapters using the system clock.
    #[must_use]
    pub fn new(
        repository: Arc<DynTasks>,
        directory: Arc<DynUsers>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            tasks: TaskLifecycleService::new(
                Arc::clone(&repository),
                Arc::clone(&directory),
                Arc::clone(&clock),
            ),
            dashboards: DashboardService::new(Arc::clone(&repository), Arc::clone(&directory)),
            reports: ReportService::new(repository, Arc::clone(&directory), clock),
            users: UserService::new(directory),
            identity,
        }
    }
}
