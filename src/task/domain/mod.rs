//! Domain model for the task lifecycle.
//!
//! A task's `status` and `progress` are derived from its checklist through
//! the recompute rule, except for explicit status overrides. All mutation
//! methods validate their input before touching the aggregate, so a rejected
//! call leaves the task unchanged.

mod assignees;
mod checklist;
mod edit;
mod error;
mod ids;
mod status;
mod task;

pub use assignees::Assignees;
pub use checklist::{ChecklistItem, ChecklistItemDraft};
pub use edit::{NewTask, TaskFieldEdit};
pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ChecklistItemId, TaskId};
pub use status::{Priority, Progress, TaskStatus};
pub use task::{PersistedTaskData, Task};
