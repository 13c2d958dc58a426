//! Actor identity and authorization for Taskdesk.
//!
//! Every service call receives an explicit [`domain::Actor`] produced by an
//! [`ports::IdentityProvider`]. The [`services::AuthorizationGuard`] decides,
//! from the actor and the target task alone, whether an operation may
//! proceed. Nothing in this module mutates state.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
