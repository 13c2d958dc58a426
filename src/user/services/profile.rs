//! Profile lookups and self-service edits on behalf of an authenticated
//! actor.

use crate::access::domain::Actor;
use crate::error::ErrorKind;
use crate::user::{
    domain::{ProfileEdit, UserDomainError, UserId, UserProfile},
    ports::{UserDirectory, UserDirectoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Service-level errors for user lookups and profile edits.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// The identifier or a profile field was malformed.
    #[error(transparent)]
    InvalidUser(#[from] UserDomainError),
    /// No user has the identifier.
    #[error("user not found: {0}")]
    NotFound(UserId),
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

impl UserServiceError {
    /// Classifies the error for reporting.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUser(_) => ErrorKind::Validation,
            Self::NotFound(_) | Self::Directory(UserDirectoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Directory(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User profile service.
pub struct UserService<U>
where
    U: UserDirectory + ?Sized,
{
    directory: Arc<U>,
}

impl<U> Clone for UserService<U>
where
    U: UserDirectory + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<U> UserService<U>
where
    U: UserDirectory + ?Sized,
{
    /// Creates a user service.
    #[must_use]
    pub const fn new(directory: Arc<U>) -> Self {
        Self { directory }
    }

    /// Returns the profile of the user with identifier `id`.
    ///
    /// Any authenticated actor may read profiles.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::InvalidUser`] for a malformed identifier
    /// and [`UserServiceError::NotFound`] when no user matches.
    pub async fn get_user(&self, actor: &Actor, id: &str) -> UserServiceResult<UserProfile> {
        let user_id = UserId::new(id)?;
        debug!(actor = %actor.id(), user = %user_id, "profile lookup");
        self.directory
            .find_by_id(&user_id)
            .await?
            .ok_or(UserServiceError::NotFound(user_id))
    }

    /// Returns the actor's own profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::NotFound`] when the actor is not in the
    /// directory.
    pub async fn get_own_profile(&self, actor: &Actor) -> UserServiceResult<UserProfile> {
        self.directory
            .find_by_id(actor.id())
            .await?
            .ok_or_else(|| UserServiceError::NotFound(actor.id().clone()))
    }

    /// Applies a partial edit to the actor's own profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::NotFound`] when the actor is not in the
    /// directory and [`UserServiceError::InvalidUser`] when a replacement
    /// name or email is malformed; the stored profile is unchanged then.
    #[instrument(skip(self, actor, edit), fields(actor = %actor.id()))]
    pub async fn update_own_profile(
        &self,
        actor: &Actor,
        edit: ProfileEdit,
    ) -> UserServiceResult<UserProfile> {
        let current = self.get_own_profile(actor).await?;
        let updated = current.with_edit(edit)?;
        let stored = self.directory.update_profile(&updated).await?;
        info!(user = %stored.id(), "profile updated");
        Ok(stored)
    }
}
