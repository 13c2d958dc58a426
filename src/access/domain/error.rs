//! Authorization denial.

use crate::user::domain::UserId;
use thiserror::Error;

/// Returned when an actor is not permitted to perform an operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("user {actor} is not permitted to {operation}")]
pub struct AccessDenied {
    /// The actor that was refused.
    pub actor: UserId,
    /// Name of the refused operation.
    pub operation: &'static str,
}
