//! Report export handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use super::{ApiError, AppState, AuthenticatedActor};
use crate::report::domain::{Report, TaskReportRow, UserReportRow};

pub(super) async fn export_tasks(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<Json<Report<TaskReportRow>>, ApiError> {
    Ok(Json(state.reports.export_tasks(&actor).await?))
}

pub(super) async fn export_users(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<Json<Report<UserReportRow>>, ApiError> {
    Ok(Json(state.reports.export_users(&actor).await?))
}
