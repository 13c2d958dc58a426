//! Identity provider port.
//!
//! Token issuance and cryptographic verification happen behind this
//! contract; the rest of the crate trusts the returned [`Actor`] as given.

use crate::access::domain::Actor;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Resolves bearer credentials into actors.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticates a bearer credential.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::UnknownCredential`] when the credential does
    /// not identify an actor.
    async fn authenticate(&self, credential: &str) -> IdentityResult<Actor>;
}

/// Errors returned by identity providers.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// No credential accompanied the request.
    #[error("missing bearer credential")]
    MissingCredential,

    /// The credential was not recognized.
    #[error("credential is not recognized")]
    UnknownCredential,

    /// The same credential was registered twice.
    #[error("credential is already registered")]
    DuplicateCredential,

    /// Provider backend failure.
    #[error("identity provider error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}
