//! Domain model for actors and the operations they request.

mod actor;
mod error;
mod operation;

pub use actor::Actor;
pub use error::AccessDenied;
pub use operation::{AdminAction, TaskOperation};
