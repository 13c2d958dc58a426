//! Request-level error classification shared by every service.
//!
//! Each service keeps its own `thiserror` enum; [`ErrorKind`] is the coarse
//! category callers use to decide how to report a failure.

use serde::Serialize;

/// Category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// The actor could not be identified.
    Unauthenticated,
    /// The actor is not permitted to perform the operation.
    Forbidden,
    /// The task, checklist item or user does not exist.
    NotFound,
    /// A concurrent write was detected; the caller may retry.
    Conflict,
    /// Unexpected infrastructure failure.
    Internal,
}

impl ErrorKind {
    /// Returns `true` when retrying the same request may succeed.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Conflict)
    }
}
