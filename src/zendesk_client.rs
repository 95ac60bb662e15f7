//! HTTP client for the Zendesk ticket API.
//!
//! This module provides the `ZendeskClient` struct for making authenticated
//! GET requests to the Zendesk REST API (`/api/v2/tickets`).
//!
//! Requests are issued strictly one at a time; there is no retry logic and
//! no rate-limit handling. A non-200 status is mapped to a user-facing
//! `LensError::ApiAccess` whose message depends on the status code.
//!
//! # Security
//!
//! The API token is never logged. Error details built from response bodies
//! are sanitized before they are surfaced.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::LensError;
use crate::models::{ApiErrorBody, Ticket, TicketListResponse, TicketResponse};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum length (in characters) for undecodable error response bodies,
/// to avoid dumping verbose server internals on the console.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Zendesk ticket API.
///
/// Handles URL construction, Basic Auth, and response decoding for the
/// two read operations the viewer needs.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_cli(Cli::parse())?;
/// let client = ZendeskClient::new(&config)?;
///
/// let tickets = client.list_tickets().await?;
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the API (e.g., `https://acme.zendesk.com/api/v2`).
    base_url: String,

    /// Basic Auth username is `{user_id}/token`, per the Zendesk token
    /// authentication scheme.
    user_id: String,

    /// API token used as the Basic Auth password.
    /// SECURITY: Never log this value!
    api_token: String,
}

impl ZendeskClient {
    /// Creates a new client from configuration.
    ///
    /// The base URL is derived from the configured subdomain as
    /// `https://{subdomain}.zendesk.com/api/v2`. The subdomain itself is
    /// interpolated as-is, without syntax validation.
    ///
    /// # Errors
    ///
    /// Returns `LensError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, LensError> {
        Self::with_base_url(
            format!("https://{}.zendesk.com/api/v2", config.subdomain),
            &config.user_id,
            &config.api_token,
        )
    }

    /// Creates a client against an explicit base URL.
    ///
    /// Used by tests to point the client at a mock server.
    pub(crate) fn with_base_url(
        base_url: impl Into<String>,
        user_id: &str,
        api_token: &str,
    ) -> Result<Self, LensError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(LensError::HttpClient)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_id: user_id.to_string(),
            api_token: api_token.to_string(),
        })
    }

    /// Returns the resource URL for a single ticket, or for the full
    /// collection when no id is given.
    pub fn resource_url(&self, ticket_id: Option<u64>) -> String {
        match ticket_id {
            Some(id) => format!("{}/tickets/{}.json", self.base_url, id),
            None => format!("{}/tickets.json", self.base_url),
        }
    }

    /// Fetches a single ticket by its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `LensError::Connectivity` on transport failure,
    /// `LensError::ApiAccess` on a non-200 status, and `LensError::Decode`
    /// if the 200 body is not a ticket envelope.
    pub async fn get_ticket(&self, ticket_id: u64) -> Result<Ticket, LensError> {
        let url = self.resource_url(Some(ticket_id));
        let response: TicketResponse = self.get(&url).await?;
        Ok(response.ticket)
    }

    /// Fetches the full ticket collection in one request.
    ///
    /// Batching for display is done client-side by the viewer; this call
    /// returns everything the server sends, in server order.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get_ticket`](Self::get_ticket).
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, LensError> {
        let url = self.resource_url(None);
        let response: TicketListResponse = self.get(&url).await?;
        Ok(response.tickets)
    }

    /// Makes an authenticated GET request and decodes the 200 body.
    async fn get<T>(&self, url: &str) -> Result<T, LensError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url = %url, "making Zendesk API request");

        let response = self
            .http
            .get(url)
            .basic_auth(format!("{}/token", self.user_id), Some(&self.api_token))
            .send()
            .await
            .map_err(LensError::Connectivity)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(self.handle_http_error(status, response).await);
        }

        let body = response.text().await.map_err(LensError::Connectivity)?;

        tracing::trace!(body = %body, "Zendesk API response");

        serde_json::from_str(&body).map_err(LensError::from)
    }

    /// Converts a non-200 response into `LensError::ApiAccess`.
    ///
    /// Extracts the server's `error` field verbatim when the body has the
    /// documented error shape; otherwise falls back to the raw body,
    /// truncated. Either way the detail is sanitized so the token cannot
    /// leak through an echoing server.
    async fn handle_http_error(&self, status: StatusCode, response: reqwest::Response) -> LensError {
        let body = response.text().await.unwrap_or_default();

        let detail = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.chars().count() > MAX_ERROR_BODY_LEN => {
                let truncated: String = body.chars().take(MAX_ERROR_BODY_LEN).collect();
                format!("{truncated}...[truncated]")
            }
            Err(_) => body,
        };
        let detail = LensError::sanitize_message(&detail, &self.api_token);

        tracing::debug!(status = %status, "Zendesk API returned an error status");

        LensError::api_access(status, &detail)
    }
}
