//! Data models for the Zendesk API.
//!
//! This module contains type definitions for the ticket endpoints,
//! including the ticket record itself and the JSON envelopes the API
//! wraps its responses in.

mod ticket;

pub use ticket::*;
