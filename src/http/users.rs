//! User profile and member workload handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;

use super::{ApiError, AppState, AuthenticatedActor};
use crate::task::services::MemberWorkload;
use crate::user::domain::{ProfileEdit, UserProfile};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct ProfileBody {
    name: Option<String>,
    email: Option<String>,
    profile_image_url: Option<String>,
}

impl From<ProfileBody> for ProfileEdit {
    fn from(body: ProfileBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            profile_image_url: body.profile_image_url,
        }
    }
}

pub(super) async fn list_members(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<Json<Vec<MemberWorkload>>, ApiError> {
    Ok(Json(state.dashboards.member_workloads(&actor).await?))
}

pub(super) async fn get_one(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(state.users.get_user(&actor, &id).await?))
}

pub(super) async fn get_profile(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(state.users.get_own_profile(&actor).await?))
}

pub(super) async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthenticatedActor(actor): AuthenticatedActor,
    body: Result<Json<ProfileBody>, JsonRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let Json(payload) = body?;
    let profile = state
        .users
        .update_own_profile(&actor, payload.into())
        .await?;
    Ok(Json(profile))
}
