//! Task lifecycle management for Taskdesk.
//!
//! Tasks carry a checklist whose completion ratio drives `progress`, and
//! `progress` in turn drives `status`. Admins create and delete tasks;
//! admins and assignees edit fields, change status and tick checklist items.
//! The module follows hexagonal architecture:
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
