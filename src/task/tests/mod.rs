//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain invariants, the recompute rule,
//! the in-memory repository, and the lifecycle and dashboard services.

mod support;
