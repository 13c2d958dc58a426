//! Non-empty set of task assignees.

use super::TaskDomainError;
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated, non-empty set of assigned users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<UserId>", into = "Vec<UserId>")]
pub struct Assignees(Vec<UserId>);

impl Assignees {
    /// Creates an assignee set, keeping the first occurrence of each user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NoAssignees`] when no user is supplied.
    pub fn new(users: impl IntoIterator<Item = UserId>) -> Result<Self, TaskDomainError> {
        let mut unique: Vec<UserId> = Vec::new();
        for user in users {
            if !unique.contains(&user) {
                unique.push(user);
            }
        }
        if unique.is_empty() {
            return Err(TaskDomainError::NoAssignees);
        }
        Ok(Self(unique))
    }

    /// Returns `true` when `user` is assigned.
    #[must_use]
    pub fn contains(&self, user: &UserId) -> bool {
        self.0.contains(user)
    }

    /// Iterates over assigned users in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.0.iter()
    }

    /// Returns the assigned users as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[UserId] {
        &self.0
    }

    /// Returns the number of assigned users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nobody is assigned, which validation rules out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<UserId>> for Assignees {
    type Error = TaskDomainError;

    fn try_from(value: Vec<UserId>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Assignees> for Vec<UserId> {
    fn from(value: Assignees) -> Self {
        value.0
    }
}
