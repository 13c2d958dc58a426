//! Identity provider backed by a static credential table.
//!
//! The table is assembled from configuration at process start, so the
//! shared secrets never live in global state.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::access::{
    domain::Actor,
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

/// Maps opaque bearer tokens to actors.
#[derive(Debug, Clone, Default)]
pub struct TokenTableIdentityProvider {
    tokens: HashMap<String, Actor>,
}

impl TokenTableIdentityProvider {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token for an actor.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::MissingCredential`] for a blank token and
    /// [`IdentityError::DuplicateCredential`] when the token is already
    /// registered.
    pub fn register(&mut self, token: impl Into<String>, actor: Actor) -> IdentityResult<()> {
        let raw = token.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::MissingCredential);
        }
        if self.tokens.contains_key(trimmed) {
            return Err(IdentityError::DuplicateCredential);
        }
        self.tokens.insert(trimmed.to_owned(), actor);
        Ok(())
    }

    /// Returns the number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl IdentityProvider for TokenTableIdentityProvider {
    async fn authenticate(&self, credential: &str) -> IdentityResult<Actor> {
        let trimmed = credential.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::MissingCredential);
        }
        self.tokens
            .get(trimmed)
            .cloned()
            .ok_or(IdentityError::UnknownCredential)
    }
}
