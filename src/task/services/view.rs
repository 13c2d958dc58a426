//! Client-facing task representation with referenced users resolved.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::task::domain::{ChecklistItem, Priority, Progress, Task, TaskId, TaskStatus};
use crate::user::domain::{UserId, UserProfile};

/// Name and contact details of a user referenced by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Display name, or the identifier when the user is no longer known.
    pub name: String,
    /// Email address; absent when the user is no longer known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Profile image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl UserSummary {
    fn resolve(id: &UserId, profiles: &HashMap<UserId, UserProfile>) -> Self {
        profiles.get(id).map_or_else(
            || Self {
                id: id.clone(),
                name: id.to_string(),
                email: None,
                profile_image_url: None,
            },
            |profile| Self {
                id: id.clone(),
                name: profile.name().to_owned(),
                email: Some(profile.email().to_owned()),
                profile_image_url: profile.profile_image_url().map(str::to_owned),
            },
        )
    }
}

/// A task with its assignees and creator expanded into [`UserSummary`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Priority.
    pub priority: Priority,
    /// Status.
    pub status: TaskStatus,
    /// Progress percentage.
    pub progress: Progress,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Assignees in assignment order.
    pub assigned_to: Vec<UserSummary>,
    /// Creator.
    pub created_by: UserSummary,
    /// Checklist in order.
    pub todo_checklist: Vec<ChecklistItem>,
    /// Number of completed checklist items.
    pub completed_checklist_count: usize,
    /// Attachment references.
    pub attachments: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskView {
    pub(super) fn build(task: &Task, profiles: &HashMap<UserId, UserProfile>) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            priority: task.priority(),
            status: task.status(),
            progress: task.progress(),
            due_date: task.due_date(),
            assigned_to: task
                .assigned_to()
                .iter()
                .map(|id| UserSummary::resolve(id, profiles))
                .collect(),
            created_by: UserSummary::resolve(task.created_by(), profiles),
            todo_checklist: task.todo_checklist().to_vec(),
            completed_checklist_count: task.completed_checklist_count(),
            attachments: task.attachments().to_vec(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}
