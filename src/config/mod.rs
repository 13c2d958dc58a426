//! Layered configuration for the Taskdesk server.
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskdesk/config.toml`)
//! 4. Compiled defaults
//!
//! The `[[users]]` table seeds the user directory and the bearer token
//! table used by the identity provider.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::access::{
    adapters::TokenTableIdentityProvider,
    domain::Actor,
    ports::IdentityError,
};
use crate::user::{
    adapters::memory::InMemoryUserDirectory,
    domain::{ParseRoleError, Role, UserDomainError, UserId, UserProfile},
    ports::UserDirectoryError,
};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur when loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// A configured user is malformed.
    #[error("invalid user '{id}': {source}")]
    InvalidUser {
        /// Identifier as written in the file.
        id: String,
        /// Validation failure.
        source: UserDomainError,
    },

    /// A configured user has an unknown role.
    #[error("invalid role for user '{id}': {source}")]
    InvalidRole {
        /// Identifier as written in the file.
        id: String,
        /// Parse failure.
        source: ParseRoleError,
    },

    /// Two configured users share an identifier.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),

    /// A configured token is blank or shared by two users.
    #[error("invalid token for user '{id}': {source}")]
    InvalidToken {
        /// Identifier of the user owning the token.
        id: String,
        /// Registration failure.
        source: IdentityError,
    },
}

/// Top-level TOML config file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerFileConfig,
    users: Vec<UserEntry>,
}

/// `[server]` section of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServerFileConfig {
    bind_addr: Option<String>,
    log_level: Option<String>,
}

/// One `[[users]]` entry of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserEntry {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role name, `admin` or `member`.
    pub role: String,
    /// Bearer token identifying the user, if the user may sign in.
    #[serde(default)]
    pub token: Option<String>,
    /// Profile image reference.
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl UserEntry {
    fn to_profile(&self) -> Result<UserProfile, ConfigError> {
        let invalid = |source| ConfigError::InvalidUser {
            id: self.id.clone(),
            source,
        };
        let user_id = UserId::new(self.id.as_str()).map_err(invalid)?;
        let role = Role::try_from(self.role.as_str()).map_err(|source| {
            ConfigError::InvalidRole {
                id: self.id.clone(),
                source,
            }
        })?;
        let profile =
            UserProfile::new(user_id, self.name.as_str(), self.email.as_str(), role).map_err(invalid)?;
        Ok(match &self.profile_image_url {
            Some(url) => profile.with_profile_image_url(url.as_str()),
            None => profile,
        })
    }
}

/// CLI arguments for the server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Taskdesk task-management server")]
pub struct AppCliArgs {
    /// Address to bind the HTTP server to.
    #[arg(short, long, env = "TASKDESK_ADDR")]
    pub bind: Option<String>,

    /// Path to config file (default: `~/.config/taskdesk/config.toml`).
    #[arg(short, long, env = "TASKDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "TASKDESK_LOG")]
    pub log_level: Option<String>,
}

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the server to (e.g., `127.0.0.1:8000`).
    pub bind_addr: String,
    /// Log level filter string.
    pub log_level: String,
    /// Users seeding the directory and token table.
    pub users: Vec<UserEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            users: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &AppCliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, file))
    }

    /// Parses configuration from TOML text with no CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] when the text is not valid.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Self::resolve(&AppCliArgs::default(), file))
    }

    /// Priority: CLI > file > default.
    fn resolve(cli: &AppCliArgs, file: ConfigFile) -> Self {
        let ConfigFile { server, users } = file;
        Self {
            bind_addr: cli
                .bind
                .clone()
                .or(server.bind_addr)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            log_level: cli
                .log_level
                .clone()
                .or(server.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
            users,
        }
    }

    /// Validates the configured users and returns their profiles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUser`] or [`ConfigError::InvalidRole`]
    /// for the first malformed entry.
    pub fn user_profiles(&self) -> Result<Vec<UserProfile>, ConfigError> {
        self.users.iter().map(UserEntry::to_profile).collect()
    }

    /// Builds the user directory from the configured users.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed entries and
    /// [`ConfigError::Directory`] for duplicate identifiers.
    pub fn user_directory(&self) -> Result<InMemoryUserDirectory, ConfigError> {
        Ok(InMemoryUserDirectory::with_users(self.user_profiles()?)?)
    }

    /// Builds the bearer token table from the configured users.
    ///
    /// Users without a token cannot authenticate.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed entries and
    /// [`ConfigError::InvalidToken`] for blank or shared tokens.
    pub fn identity_provider(&self) -> Result<TokenTableIdentityProvider, ConfigError> {
        let mut provider = TokenTableIdentityProvider::new();
        for entry in &self.users {
            let Some(token) = &entry.token else {
                continue;
            };
            let profile = entry.to_profile()?;
            provider
                .register(token.as_str(), Actor::new(profile.id().clone(), profile.role()))
                .map_err(|source| ConfigError::InvalidToken {
                    id: entry.id.clone(),
                    source,
                })?;
        }
        Ok(provider)
    }
}

/// Load and parse a TOML config file.
fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(ConfigFile::default());
    };
    let path = config_dir.join("taskdesk").join("config.toml");
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
