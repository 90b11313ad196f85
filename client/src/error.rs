//! Error types for the todo API client.
//!
//! # Design
//! Two failure families: `Network` for transport-level errors and the rest
//! for responses that arrived but could not be used. `NotFound` gets a
//! dedicated variant because callers may want to distinguish "the todo does
//! not exist" from "the server returned an unexpected status"; presentation
//! layers are free to collapse both into one generic message. All other
//! non-2xx responses land in `Server` with the raw status code and body for
//! debugging.

use thiserror::Error;

/// Errors surfaced by `TodoClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS
    /// failure, broken pipe while reading the body).
    #[error("network error: {0}")]
    Network(String),

    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
