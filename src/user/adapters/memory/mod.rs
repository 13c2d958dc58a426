//! In-memory adapters for the user directory.

mod directory;

pub use directory::InMemoryUserDirectory;
