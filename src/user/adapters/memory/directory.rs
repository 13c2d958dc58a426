//! In-memory user directory seeded at process start.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::user::{
    domain::{Role, UserId, UserProfile},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory containing the given users.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::DuplicateUser`] when two profiles share
    /// an identifier.
    pub fn with_users(
        users: impl IntoIterator<Item = UserProfile>,
    ) -> UserDirectoryResult<Self> {
        let directory = Self::new();
        for user in users {
            directory.insert(user)?;
        }
        Ok(directory)
    }

    /// Adds a user to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::DuplicateUser`] when the identifier is
    /// already present.
    pub fn insert(&self, user: UserProfile) -> UserDirectoryResult<()> {
        let mut users = self.write()?;
        if users.contains_key(user.id()) {
            return Err(UserDirectoryError::DuplicateUser(user.id().clone()));
        }
        users.insert(user.id().clone(), user);
        Ok(())
    }

    fn read(&self) -> UserDirectoryResult<RwLockReadGuard<'_, HashMap<UserId, UserProfile>>> {
        self.users
            .read()
            .map_err(|err| UserDirectoryError::backend(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> UserDirectoryResult<RwLockWriteGuard<'_, HashMap<UserId, UserProfile>>> {
        self.users
            .write()
            .map_err(|err| UserDirectoryError::backend(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: &UserId) -> UserDirectoryResult<Option<UserProfile>> {
        let users = self.read()?;
        Ok(users.get(id).cloned())
    }

    async fn list_by_role(&self, role: Role) -> UserDirectoryResult<Vec<UserProfile>> {
        let users = self.read()?;
        let mut matching: Vec<UserProfile> = users
            .values()
            .filter(|user| user.role() == role)
            .cloned()
            .collect();
        matching.sort_by(|left, right| {
            left.name()
                .cmp(right.name())
                .then_with(|| left.id().cmp(right.id()))
        });
        Ok(matching)
    }

    async fn update_profile(&self, profile: &UserProfile) -> UserDirectoryResult<UserProfile> {
        let mut users = self.write()?;
        let stored = users
            .get_mut(profile.id())
            .ok_or_else(|| UserDirectoryError::NotFound(profile.id().clone()))?;
        stored.clone_from(profile);
        Ok(profile.clone())
    }
}
