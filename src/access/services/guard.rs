//! Role-based authorization for task operations.
//!
//! Admins may perform every operation. Members may read and edit only the
//! tasks they are assigned to and may never create or delete tasks.

use crate::access::domain::{AccessDenied, Actor, AdminAction, TaskOperation};
use crate::task::domain::Task;

/// Stateless authorization decisions over `(actor, task, operation)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationGuard;

impl AuthorizationGuard {
    /// Returns `true` when `actor` may perform `operation` on `task`.
    #[must_use]
    pub fn is_allowed(actor: &Actor, task: &Task, operation: TaskOperation) -> bool {
        if actor.is_admin() {
            return true;
        }
        match operation {
            TaskOperation::Create | TaskOperation::Delete => false,
            TaskOperation::Read
            | TaskOperation::UpdateFields
            | TaskOperation::UpdateStatus
            | TaskOperation::UpdateChecklist => task.is_assigned_to(actor.id()),
        }
    }

    /// Authorizes `operation` on `task`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when [`Self::is_allowed`] refuses the
    /// operation.
    pub fn authorize(
        actor: &Actor,
        task: &Task,
        operation: TaskOperation,
    ) -> Result<(), AccessDenied> {
        if Self::is_allowed(actor, task, operation) {
            return Ok(());
        }
        Err(AccessDenied {
            actor: actor.id().clone(),
            operation: operation.as_str(),
        })
    }

    /// Authorizes an action that does not target an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] unless the actor is an admin.
    pub fn authorize_admin(actor: &Actor, action: AdminAction) -> Result<(), AccessDenied> {
        if actor.is_admin() {
            return Ok(());
        }
        Err(AccessDenied {
            actor: actor.id().clone(),
            operation: action.as_str(),
        })
    }
}
