//! Error types for probe operations.
//!
//! This module defines [`ProbeError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure while probing surfaces as a `ProbeError`
//! - The CLI reports errors as text and never propagates them as a crash
//! - [`error_chain`] renders the full cause so the underlying fault is visible

use thiserror::Error;

/// Core error type for probe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The endpoint could not be combined with the query parameters.
    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport-level failure (connection, DNS, timeout, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A 200 response whose body is not JSON.
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A JSON document that is not an object, so it has no keys.
    #[error("Response document is not a JSON object")]
    NotAnObject,

    /// The first insight is not a JSON object.
    #[error("First insight is not a JSON object: {found}")]
    MalformedInsight { found: String },
}

impl ProbeError {
    /// Whether this error was caused by the request timing out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Render an error followed by each of its sources, joined by `": "`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper and reqwest sometimes repeat the outer message verbatim
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
