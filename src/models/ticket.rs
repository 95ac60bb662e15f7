//! Ticket models for the Zendesk API.
//!
//! A ticket is an immutable snapshot fetched on demand; the viewer never
//! mutates or persists it locally.

use serde::Deserialize;

/// A support ticket as returned by the Zendesk API.
///
/// Only the fields the viewer renders are deserialized; the API returns
/// many more, which serde ignores.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    /// Server-assigned unique ticket ID.
    pub id: u64,

    /// Current status: one of `new`, `open`, `pending`, `hold`, `solved`,
    /// `closed`.
    pub status: String,

    /// Priority level, absent until triaged.
    #[serde(default)]
    pub priority: Option<String>,

    /// ID of the assigned agent, absent while unassigned.
    #[serde(default)]
    pub assignee_id: Option<u64>,

    /// Subject/title of the ticket.
    pub subject: String,

    /// Full description text.
    #[serde(default)]
    pub description: String,
}

impl Ticket {
    /// Returns the priority if present, otherwise a placeholder.
    pub fn display_priority(&self) -> &str {
        self.priority.as_deref().unwrap_or("none")
    }

    /// Returns the assignee ID as text, or a placeholder while unassigned.
    pub fn display_assignee_id(&self) -> String {
        match self.assignee_id {
            Some(id) => id.to_string(),
            None => "none".to_string(),
        }
    }
}

/// Envelope for a single-ticket response: `{ "ticket": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct TicketResponse {
    /// The fetched ticket.
    pub ticket: Ticket,
}

/// Envelope for a collection response: `{ "tickets": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct TicketListResponse {
    /// The fetched tickets, in server order.
    pub tickets: Vec<Ticket>,
}

/// Error body shape returned by the API on failures: `{ "error": "..." }`.
///
/// Some failure modes return a structured object under `error` instead of
/// a string; callers should fall back to the raw body when this shape does
/// not match.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error detail.
    pub error: String,
}
