//! Bearer-token extraction of the calling actor.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{ApiError, AppState};
use crate::access::{domain::Actor, ports::IdentityError};

/// The actor resolved from the request's `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedActor(pub Actor);

impl FromRequestParts<Arc<AppState>> for AuthenticatedActor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(IdentityError::MissingCredential)?;
        let actor = state.identity.authenticate(token).await?;
        Ok(Self(actor))
    }
}
