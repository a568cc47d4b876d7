//! Error types for the inflection pipeline

use thiserror::Error;

/// Errors that can occur when inflecting a word
#[derive(Debug, Error)]
pub enum InflectError {
    /// The word is empty once surrounding whitespace is removed
    #[error("Word is not valid: empty after trimming")]
    InvalidWord,

    /// The service body could not be parsed as XML
    #[error("Invalid response from inflection service: {0}")]
    MalformedResponse(String),

    /// The body is valid XML but carries no `inflection` elements
    #[error("Unexpected response from inflection service: no <inflection> elements")]
    UnexpectedSchema,

    /// HTTP request failed (timeout, DNS, connection, ...)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
