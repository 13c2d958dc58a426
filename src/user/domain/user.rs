//! User profile aggregate.

use super::{Role, UserDomainError, UserId};
use serde::{Deserialize, Serialize};

/// Public profile of a user known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    id: UserId,
    name: String,
    email: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_image_url: Option<String>,
}

impl UserProfile {
    /// Creates a validated user profile.
    ///
    /// The email is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] when the name is blank or
    /// [`UserDomainError::InvalidEmail`] when the email has no local part or
    /// domain.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, UserDomainError> {
        let raw_name = name.into();
        let trimmed_name = raw_name.trim();
        if trimmed_name.is_empty() {
            return Err(UserDomainError::EmptyName);
        }

        let raw_email = email.into();
        let normalized_email = raw_email.trim().to_ascii_lowercase();
        let is_valid_email = normalized_email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            });
        if !is_valid_email {
            return Err(UserDomainError::InvalidEmail(raw_email));
        }

        Ok(Self {
            id,
            name: trimmed_name.to_owned(),
            email: normalized_email,
            role,
            profile_image_url: None,
        })
    }

    /// Sets the profile image reference.
    #[must_use]
    pub fn with_profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = Some(url.into());
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the user's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the profile image reference, if any.
    #[must_use]
    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url.as_deref()
    }

    /// Returns a copy with `edit` applied.
    ///
    /// The identifier and role never change. Name and email are validated as
    /// in [`UserProfile::new`]; a blank image reference clears the image.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] or
    /// [`UserDomainError::InvalidEmail`] when a replacement is malformed.
    pub fn with_edit(&self, edit: ProfileEdit) -> Result<Self, UserDomainError> {
        let mut updated = Self::new(
            self.id.clone(),
            edit.name.unwrap_or_else(|| self.name.clone()),
            edit.email.unwrap_or_else(|| self.email.clone()),
            self.role,
        )?;
        updated.profile_image_url = match edit.profile_image_url {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url),
            None => self.profile_image_url.clone(),
        };
        Ok(updated)
    }
}

/// Partial edit of a user's own profile. Unset fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEdit {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement profile image reference.
    pub profile_image_url: Option<String>,
}
