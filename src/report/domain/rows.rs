//! Flat rows for task and user reports.

use serde::Serialize;

/// A named report with its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<T> {
    /// File stem, e.g. `tasks_report_2026-01-31`.
    pub name: String,
    /// Column headers in display order.
    pub headers: Vec<&'static str>,
    /// Report rows.
    pub rows: Vec<T>,
}

/// One row of the task report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReportRow {
    /// Task identifier.
    pub task_id: String,
    /// Task title.
    pub title: String,
    /// Task description, empty when absent.
    pub description: String,
    /// Task status.
    pub status: String,
    /// Task priority.
    pub priority: String,
    /// Due date as `YYYY-MM-DD`, empty when absent.
    pub due_date: String,
    /// Assignee names joined with `, `.
    pub assigned_to: String,
    /// Creator name.
    pub created_by: String,
    /// Creation date as `YYYY-MM-DD`.
    pub created_at: String,
    /// Progress as `NN%`.
    pub progress: String,
}

impl TaskReportRow {
    /// Column headers of the task report.
    pub const HEADERS: [&'static str; 10] = [
        "Task ID",
        "Title",
        "Description",
        "Status",
        "Priority",
        "Due Date",
        "Assigned To",
        "Created By",
        "Created At",
        "Progress",
    ];
}

/// One row of the user report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReportRow {
    /// User identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Tasks assigned to the user.
    pub total_tasks: usize,
    /// Assigned pending tasks.
    pub pending_tasks: usize,
    /// Assigned in-progress tasks.
    pub in_progress_tasks: usize,
    /// Assigned completed tasks.
    pub completed_tasks: usize,
    /// Completion rate as `NN.N%`.
    pub completion_rate: String,
}

impl UserReportRow {
    /// Column headers of the user report.
    pub const HEADERS: [&'static str; 8] = [
        "User ID",
        "Name",
        "Email",
        "Total Tasks",
        "Pending Tasks",
        "In Progress Tasks",
        "Completed Tasks",
        "Completion Rate",
    ];
}
