//! Configuration management for the Lens ticket viewer.
//!
//! This module defines the CLI surface and turns parsed arguments into a
//! validated [`Config`], reading the API token from the credential file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::LensError;

/// Default number of tickets shown per batch in the pagination loop.
pub const DEFAULT_BATCH_SIZE: usize = 25;

/// Command-line arguments for the viewer.
#[derive(Debug, Parser)]
#[command(name = "lens", version, about = "Interactive command-line ticket viewer for Zendesk")]
pub struct Cli {
    /// Subdomain of the Zendesk account (the tenant part of the hostname).
    #[arg(long)]
    pub subdomain: String,

    /// User ID (email) of the Zendesk account.
    #[arg(long)]
    pub user_id: String,

    /// Path to a file whose first line is the API token.
    #[arg(long)]
    pub token_file: PathBuf,

    /// Number of tickets to display per batch.
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

/// Validated runtime configuration.
///
/// The API token is stored in memory for the process lifetime and must
/// never be logged or included in error messages.
#[derive(Clone)]
pub struct Config {
    /// Subdomain of the Zendesk account.
    pub subdomain: String,

    /// User ID used as the Basic Auth username (with a `/token` suffix).
    pub user_id: String,

    /// API token read from the credential file.
    /// SECURITY: never log this value!
    pub api_token: String,

    /// Number of tickets to display per batch.
    pub batch_size: usize,
}

impl std::fmt::Debug for Config {
    /// Redacts the API token so it never appears in debug output, honoring
    /// the security contract documented on the struct.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("subdomain", &self.subdomain)
            .field("user_id", &self.user_id)
            .field("api_token", &"<redacted>")
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl Config {
    /// Builds a validated configuration from parsed CLI arguments.
    ///
    /// Reads the first line of the token file as the API token.
    ///
    /// # Errors
    ///
    /// Returns `LensError::Config` if the subdomain or user ID is blank,
    /// the batch size is zero, or the token file is missing, unreadable,
    /// or empty.
    pub fn from_cli(cli: Cli) -> Result<Self, LensError> {
        let subdomain = cli.subdomain.trim().to_string();
        if subdomain.is_empty() {
            return Err(LensError::config("subdomain must not be empty"));
        }

        let user_id = cli.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(LensError::config("user ID must not be empty"));
        }

        if cli.batch_size == 0 {
            return Err(LensError::config("batch size must be at least 1"));
        }

        let api_token = Self::read_token_file(&cli.token_file)?;

        Ok(Config {
            subdomain,
            user_id,
            api_token,
            batch_size: cli.batch_size,
        })
    }

    /// Reads the API token from the first line of the given file.
    ///
    /// Trailing whitespace (including the newline) is stripped. Lines past
    /// the first are ignored.
    fn read_token_file(path: &Path) -> Result<String, LensError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            LensError::config(format!("cannot read token file {}: {e}", path.display()))
        })?;

        let token = contents
            .lines()
            .next()
            .map(str::trim)
            .unwrap_or_default();

        if token.is_empty() {
            return Err(LensError::config(format!(
                "token file {} is empty",
                path.display()
            )));
        }

        Ok(token.to_string())
    }
}
