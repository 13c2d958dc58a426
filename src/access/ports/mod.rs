//! Port contracts for resolving actors from credentials.

pub mod identity;

pub use identity::{IdentityError, IdentityProvider, IdentityResult};
