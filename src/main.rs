//! Lens - interactive command-line ticket viewer for Zendesk
//!
//! Fetches tickets from the Zendesk REST API and renders them on the
//! console through a small command loop.
//!
//! # Usage
//!
//! ```bash
//! lens --subdomain acme --user-id agent@acme.example --token-file ~/.zendesk_token
//! ```
//!
//! The first line of the token file is used as the API token. Diagnostics
//! go to stderr via `RUST_LOG` (e.g. `RUST_LOG=lens=debug`).

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use lens::config::{Cli, Config};
use lens::viewer::Viewer;
use lens::zendesk_client::ZendeskClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr so stdout stays clean for the interactive
    // prompts and ticket output.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lens=warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    // Startup errors (missing token file, blank arguments) are fatal and
    // abort before any interaction.
    let config = Config::from_cli(cli).context("Failed to load configuration")?;

    tracing::debug!(subdomain = %config.subdomain, "configuration loaded");

    let client = ZendeskClient::new(&config).context("Failed to create Zendesk client")?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut viewer = Viewer::new(client, stdin, stdout, config.batch_size);

    viewer.run().await.context("Console I/O failure")?;

    tracing::debug!("viewer session ended");

    Ok(())
}
