//! Application services for task lifecycle orchestration.

mod dashboard;
mod lifecycle;
mod summary;
mod view;

pub use dashboard::{
    DashboardService, MemberDashboard, MemberPerformance, MemberRef, MemberSummary,
    MemberWorkload, RECENT_TASK_LIMIT, TeamDashboard, TeamSummary,
};
pub use lifecycle::{
    CreateTaskRequest, StatusSummary, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService, TaskListEntry, TaskListing, UpdateChecklistItemRequest,
    UpdateStatusRequest, UpdateTaskRequest,
};
pub use summary::{CompletionRate, PriorityBreakdown, StatusBreakdown};
pub use view::{TaskView, UserSummary};
