//! Operations subject to authorization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation requested against a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOperation {
    /// Create a task.
    Create,
    /// Read a task.
    Read,
    /// Edit title, description, priority, due date, assignees, attachments or
    /// the whole checklist.
    UpdateFields,
    /// Change the task status explicitly.
    UpdateStatus,
    /// Toggle a single checklist item.
    UpdateChecklist,
    /// Delete the task.
    Delete,
}

impl TaskOperation {
    /// Returns the canonical name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::UpdateFields => "update_fields",
            Self::UpdateStatus => "update_status",
            Self::UpdateChecklist => "update_checklist",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for TaskOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action that does not target a single task and is reserved for admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    /// Create a new task.
    CreateTask,
    /// View the team-wide dashboard.
    ViewTeamDashboard,
    /// List members together with their workload.
    ListMembers,
    /// Export task and user reports.
    ExportReports,
}

impl AdminAction {
    /// Returns the canonical name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTask => "create_task",
            Self::ViewTeamDashboard => "view_team_dashboard",
            Self::ListMembers => "list_members",
            Self::ExportReports => "export_reports",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
