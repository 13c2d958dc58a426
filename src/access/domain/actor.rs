//! Authenticated actor performing a request.

use crate::user::domain::{Role, UserId};
use serde::{Deserialize, Serialize};

/// An authenticated identity with a role.
///
/// Actors are derived from verified credentials for each request and are
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    id: UserId,
    role: Role,
}

impl Actor {
    /// Creates an actor.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    /// Creates an actor holding the admin role.
    #[must_use]
    pub const fn admin(id: UserId) -> Self {
        Self::new(id, Role::Admin)
    }

    /// Creates an actor holding the member role.
    #[must_use]
    pub const fn member(id: UserId) -> Self {
        Self::new(id, Role::Member)
    }

    /// Returns the actor's user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the actor's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` when the actor holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}
