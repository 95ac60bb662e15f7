//! Error types for the Lens ticket viewer.
//!
//! This module defines `LensError`, the unified error type used throughout
//! the application for consistent error handling and propagation.
//!
//! # Security
//!
//! Error messages built from server responses are sanitized so the API
//! token never leaks into console output or logs. Use `sanitize_message()`
//! when constructing error messages from external sources.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all Lens operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking sensitive information
/// like the API token.
#[derive(Error, Debug)]
pub enum LensError {
    /// Configuration error - bad CLI arguments or an unusable token file.
    /// Fatal: raised before the command loop starts.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure (DNS, connection refused, timeout).
    #[error(
        "An error occurred while accessing the API. \
         Please check your internet connection or try again later."
    )]
    Connectivity(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The API answered with a non-200 status code.
    ///
    /// The message is derived from the status code per `api_access()` and
    /// already interpolates the server-provided error detail.
    #[error("{message}")]
    ApiAccess {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The full user-facing message, including the server error detail.
        message: String,
    },

    /// A 200 response body could not be decoded into the expected shape.
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Console I/O failure while prompting or rendering.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LensError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        LensError::Config(message.into())
    }

    /// Creates an API-access error for a non-200 response.
    ///
    /// The user-facing message depends on the status code, with the
    /// server-provided error detail appended verbatim on its own line:
    ///
    /// - 401: wrong user id / API token
    /// - 403: no access to the requested resource
    /// - 404: resource does not exist
    /// - anything else: generic "try again later"
    pub fn api_access(status: StatusCode, detail: &str) -> Self {
        let message = match status {
            StatusCode::UNAUTHORIZED => format!(
                "Looks like your user ID and/or API token is wrong.\n{detail}"
            ),
            StatusCode::FORBIDDEN => format!(
                "Looks like there is no access to the resource you are trying to request.\n{detail}"
            ),
            StatusCode::NOT_FOUND => format!(
                "Looks like the resource you are trying to access does not exist.\n{detail}"
            ),
            _ => format!(
                "Unable to reach the Zendesk API, or getting an unknown error. \
                 Please try again later.\n{detail}"
            ),
        };
        LensError::ApiAccess { status, message }
    }

    /// Sanitizes an error message to remove any occurrence of the API token.
    ///
    /// The token must never appear in console output or logs, even when the
    /// server echoes request data back in an error body.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `api_token` - The token to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the token replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, api_token: &str) -> String {
        if api_token.is_empty() {
            return message.to_string();
        }
        message.replace(api_token, "[REDACTED]")
    }
}
