//! Application services for user lookups and profile edits.

mod lookup;
mod profile;

pub(crate) use lookup::resolve_profiles;
pub use profile::{UserService, UserServiceError, UserServiceResult};
