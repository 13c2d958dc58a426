//! Port contracts for user lookups.

pub mod directory;

pub use directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
