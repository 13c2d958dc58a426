//! User directory for Taskdesk.
//!
//! Users are the people tasks are assigned to and created by. Registration
//! and credential handling live outside this crate; the directory answers
//! lookups and accepts self-service profile edits through the
//! [`ports::UserDirectory`] contract.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
