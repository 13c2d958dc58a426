//! Task, checklist and dashboard handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApiError, AppState, AuthenticatedActor};
use crate::error::ErrorKind;
use crate::task::{
    domain::{ChecklistItemDraft, ChecklistItemId, Task, TaskId},
    services::{
        CreateTaskRequest, MemberDashboard, StatusSummary, TaskView, TeamDashboard,
        UpdateChecklistItemRequest, UpdateStatusRequest, UpdateTaskRequest,
    },
};

/// Response wrapping a task with a confirmation message.
#[derive(Debug, Serialize)]
pub(super) struct TaskEnvelope {
    message: &'static str,
    task: TaskView,
}

/// Listed tasks with referenced users expanded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TaskListBody {
    tasks: Vec<TaskView>,
    status_summary: StatusSummary,
}

async fn envelope(
    state: &AppState,
    message: &'static str,
    task: &Task,
) -> Result<Json<TaskEnvelope>, ApiError> {
    let task = state.tasks.present(task).await?;
    Ok(Json(TaskEnvelope { message, task }))
}

/// Response carrying only a confirmation message.
#[derive(Debug, Serialize)]
pub(super) struct MessageBody {
    message: &'static str,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListQuery {
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct CreateTaskBody {
    title: String,
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<NaiveDate>,
    assigned_to: Vec<String>,
    attachments: Vec<String>,
    todo_checklist: Vec<ChecklistItemDraft>,
}

impl CreateTaskBody {
    fn into_request(self) -> CreateTaskRequest {
        let mut request = CreateTaskRequest::new(self.title, self.assigned_to)
            .with_attachments(self.attachments)
            .with_checklist(self.todo_checklist);
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        if let Some(priority) = self.priority {
            request = request.with_priority(priority);
        }
        if let Some(due_date) = self.due_date {
            request = request.with_due_date(due_date);
        }
        request
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct UpdateTaskBody {
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<NaiveDate>,
    assigned_to: Option<Vec<String>>,
    attachments: Option<Vec<String>>,
    todo_checklist: Option<Vec<ChecklistItemDraft>>,
}

impl UpdateTaskBody {
    fn into_request(self, task_id: TaskId) -> UpdateTaskRequest {
        let mut request = UpdateTaskRequest::new(task_id);
        if let Some(title) = self.title {
            request = request.with_title(title);
        }
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        if let Some(priority) = self.priority {
            request = request.with_priority(priority);
        }
        if let Some(due_date) = self.due_date {
            request = request.with_due_date(due_date);
        }
        if let Some(assigned_to) = self.assigned_to {
            request = request.with_assignees(assigned_to);
        }
        if let Some(attachments) = self.attachments {
            request = request.with_attachments(attachments);
        }
        if let Some(items) = self.todo_checklist {
            request = request.with_checklist(items);
        }
        request
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct StatusBody {
    status: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChecklistItemBody {
    completed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ChecklistBody {
    todo_checklist: Vec<ChecklistItemDraft>,
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    Uuid::parse_str(raw)
        .map(TaskId::from_uuid)
        .map_err(|_| ApiError::new(ErrorKind::Validation, format!("invalid task id: {raw}")))
}

fn parse_item_id(raw: &str) -> Result<ChecklistItemId, ApiError> {
    Uuid::parse_str(raw)
        .map(ChecklistItemId::from_uuid)
        .map_err(|_| {
            ApiError::new(
                ErrorKind::Validation,
                format!("invalid checklist item id: {raw}"),
            )
        })
}

pub(super) async fn list(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Query(query): Query<ListQuery>,
) -> Result<Json<TaskListBody>, ApiError> {
    let listing = state
        .tasks
        .list_tasks(&actor, query.status.as_deref())
        .await?;
    let tasks: Vec<Task> = listing.tasks.into_iter().map(|entry| entry.task).collect();
    Ok(Json(TaskListBody {
        tasks: state.tasks.present_all(&tasks).await?,
        status_summary: listing.status_summary,
    }))
}

pub(super) async fn create(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskEnvelope>), ApiError> {
    let Json(payload) = body?;
    let task = state
        .tasks
        .create_task(&actor, payload.into_request())
        .await?;
    Ok((
        StatusCode::CREATED,
        envelope(&state, "Task created successfully", &task).await?,
    ))
}

pub(super) async fn get_one(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(id): Path<String>,
) -> Result<Json<TaskView>, ApiError> {
    let task = state.tasks.get_task(&actor, parse_task_id(&id)?).await?;
    Ok(Json(state.tasks.present(&task).await?))
}

pub(super) async fn update(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(id): Path<String>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<TaskEnvelope>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(payload) = body?;
    let task = state
        .tasks
        .update_task(&actor, payload.into_request(task_id))
        .await?;
    envelope(&state, "Task updated successfully", &task).await
}

pub(super) async fn delete(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state.tasks.delete_task(&actor, parse_task_id(&id)?).await?;
    Ok(Json(MessageBody {
        message: "Task deleted successfully",
    }))
}

pub(super) async fn update_status(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(id): Path<String>,
    body: Result<Json<StatusBody>, JsonRejection>,
) -> Result<Json<TaskEnvelope>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(payload) = body?;
    let task = state
        .tasks
        .update_status(&actor, UpdateStatusRequest::new(task_id, payload.status))
        .await?;
    envelope(&state, "Task status updated", &task).await
}

pub(super) async fn replace_checklist(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(id): Path<String>,
    body: Result<Json<ChecklistBody>, JsonRejection>,
) -> Result<Json<TaskEnvelope>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let Json(payload) = body?;
    let task = state
        .tasks
        .replace_checklist(&actor, task_id, payload.todo_checklist)
        .await?;
    envelope(&state, "Task checklist updated", &task).await
}

pub(super) async fn update_checklist_item(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path((id, todo_id)): Path<(String, String)>,
    body: Result<Json<ChecklistItemBody>, JsonRejection>,
) -> Result<Json<TaskEnvelope>, ApiError> {
    let request = UpdateChecklistItemRequest::new(
        parse_task_id(&id)?,
        parse_item_id(&todo_id)?,
        body?.0.completed,
    );
    let task = state.tasks.update_checklist_item(&actor, request).await?;
    envelope(&state, "Task checklist updated", &task).await
}

pub(super) async fn team_dashboard(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<Json<TeamDashboard>, ApiError> {
    Ok(Json(state.dashboards.team_dashboard(&actor).await?))
}

pub(super) async fn member_dashboard(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<Json<MemberDashboard>, ApiError> {
    Ok(Json(state.dashboards.member_dashboard(&actor).await?))
}
