//! # Lens
//!
//! Lens is an interactive command-line viewer for Zendesk support tickets.
//!
//! It authenticates against the Zendesk REST API with token-based Basic
//! Auth, fetches a single ticket or the full ticket list, and renders them
//! on the console through a small command loop with batched pagination.
//!
//! ## Features
//!
//! - **Single ticket view**: fetch one ticket by id and show its details
//! - **Ticket list view**: fetch all tickets and page through them in
//!   fixed-size batches, with drill-down into any listed ticket
//! - **Error handling**: connectivity and API failures are reported on the
//!   console without ending the session
//! - **Security**: the API token is never logged or echoed in error output
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - CLI arguments, token-file loading, validation
//! - [`error`] - Error types with status-code-aware user messages
//! - [`models`] - Data models for Zendesk API responses
//! - [`zendesk_client`] - HTTP client for the ticket endpoints
//! - [`display`] - Console rendering of menus and tickets
//! - [`viewer`] - The interactive command loop and pagination
//!
//! ## Usage
//!
//! Lens is primarily used as a binary. To run:
//!
//! ```bash
//! lens --subdomain acme --user-id agent@acme.example --token-file ~/.zendesk_token
//! ```
//!
//! The token file's first line must hold the API token. Optional:
//! `--batch-size` to change how many tickets are listed per page, and
//! `RUST_LOG` (e.g. `lens=debug`) for diagnostics on stderr.
//!
//! ## Example
//!
//! Using the [`ZendeskClient`](zendesk_client::ZendeskClient) directly:
//!
//! ```ignore
//! use clap::Parser;
//! use lens::config::{Cli, Config};
//! use lens::zendesk_client::ZendeskClient;
//!
//! async fn example() -> Result<(), lens::error::LensError> {
//!     let config = Config::from_cli(Cli::parse())?;
//!     let client = ZendeskClient::new(&config)?;
//!
//!     for ticket in client.list_tickets().await? {
//!         println!("#{}: {}", ticket.id, ticket.subject);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod viewer;
pub mod zendesk_client;
