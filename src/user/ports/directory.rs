//! Directory port for resolving users referenced by tasks.

use crate::user::domain::{Role, UserId, UserProfile};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Access to known users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user is unknown.
    async fn find_by_id(&self, id: &UserId) -> UserDirectoryResult<Option<UserProfile>>;

    /// Returns every user holding the given role, ordered by name.
    async fn list_by_role(&self, role: Role) -> UserDirectoryResult<Vec<UserProfile>>;

    /// Replaces the stored profile of an existing user and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] when no user has the
    /// profile's identifier.
    async fn update_profile(&self, profile: &UserProfile) -> UserDirectoryResult<UserProfile>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// No user has the identifier.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Lookup backend failure.
    #[error("directory error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
