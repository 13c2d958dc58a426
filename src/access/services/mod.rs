//! Authorization services.

mod guard;

pub use guard::AuthorizationGuard;
