//! Runs the Taskdesk HTTP server.
//!
//! Usage:
//!
//! ```text
//! taskdesk [--bind <addr>] [--config <path>] [--log-level <filter>]
//! ```
//!
//! Users and their bearer tokens come from the `[[users]]` table of the
//! config file. Tasks are kept in memory for the lifetime of the process.

use std::sync::Arc;

use clap::Parser;
use taskdesk::config::{AppCliArgs, AppConfig};
use taskdesk::http::{self, AppState};
use taskdesk::task::adapters::memory::InMemoryTaskRepository;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = AppCliArgs::parse();
    let config = AppConfig::load(&cli)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let directory = config.user_directory()?;
    let identity = config.identity_provider()?;
    if identity.is_empty() {
        tracing::warn!("no user has a token configured; every request will be rejected");
    }

    let state = Arc::new(AppState::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(directory),
        Arc::new(identity),
    ));

    tracing::info!(addr = %config.bind_addr, users = config.users.len(), "starting taskdesk");
    let (bound_addr, handle) = http::start_server_with_state(&config.bind_addr, state).await?;
    tracing::info!(addr = %bound_addr, "taskdesk listening");
    handle.await?;
    Ok(())
}
