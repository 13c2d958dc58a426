//! HTTP surface of the Taskdesk server.
//!
//! An axum router exposing the task, user, profile and report services. Each handler
//! resolves the caller into an [`Actor`](crate::access::domain::Actor)
//! through the [`AuthenticatedActor`] extractor and delegates to a service;
//! service errors are mapped onto status codes by [`ApiError`].

mod error;
mod extract;
mod reports;
mod state;
mod tasks;
mod users;

pub use error::ApiError;
pub use extract::AuthenticatedActor;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tokio::task::JoinHandle;

/// Builds the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route("/api/tasks/dashboard-data", get(tasks::team_dashboard))
        .route("/api/tasks/user-dashboard-data", get(tasks::member_dashboard))
        .route(
            "/api/tasks/{id}",
            get(tasks::get_one).put(tasks::update).delete(tasks::delete),
        )
        .route("/api/tasks/{id}/status", put(tasks::update_status))
        .route("/api/tasks/{id}/todo", put(tasks::replace_checklist))
        .route(
            "/api/tasks/{id}/todo/{todo_id}",
            put(tasks::update_checklist_item),
        )
        .route(
            "/api/auth/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/api/users", get(users::list_members))
        .route("/api/users/{id}", get(users::get_one))
        .route("/api/reports/export/tasks", get(reports::export_tasks))
        .route("/api/reports/export/users", get(reports::export_users))
        .with_state(state)
}

/// Binds `addr` and serves the application in a background task.
///
/// Returns the bound address, which differs from `addr` when port `0` was
/// requested.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server_with_state(
    addr: &str,
    state: Arc<AppState>,
) -> Result<(SocketAddr, JoinHandle<()>), std::io::Error> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!(error = %err, "http server error");
        }
    });

    Ok((bound_addr, handle))
}
