//! Taskdesk: role-based task management backend.
//!
//! This crate provides task tracking for a small team: admins create and
//! assign tasks, members work through checklists on the tasks assigned to
//! them, and derived progress and status stay consistent with the checklist.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores, token tables)
//!
//! # Modules
//!
//! - [`access`]: Actors, roles and the authorization guard
//! - [`task`]: Task lifecycle, checklist-driven progress and dashboards
//! - [`user`]: User profiles and the user directory
//! - [`report`]: Admin report export
//! - [`http`]: axum routes over the services
//! - [`config`]: Layered CLI, environment and file configuration
//! - [`error`]: Coarse error classification shared by services

pub mod access;
pub mod config;
pub mod error;
pub mod http;
pub mod report;
pub mod task;
pub mod user;
