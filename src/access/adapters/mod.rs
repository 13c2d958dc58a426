//! Adapter implementations for identity ports.

mod token_table;

pub use token_table::TokenTableIdentityProvider;
