//! Error types for the boundary layer
//!
//! Only the identifier parser and the request guard surface structured
//! errors. The boolean validators and the credential verifier never do.

use std::net::IpAddr;
use thiserror::Error;

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reason a tenant identifier was rejected
#[derive(Error, Debug)]
pub enum FormatError {
    /// The input contains characters that change under lowercasing
    #[error("need lowercase username")]
    NotLowercase,

    /// The UUID parser rejected the input
    #[error("invalid UUID: {0}")]
    Parse(#[from] uuid::Error),

    /// The input parsed, but not from the hyphenated textual form
    #[error("UUID must be in hyphenated form")]
    NotHyphenated,
}

/// Core error type for the boundary layer
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed tenant identifier
    #[error("Malformed username: {0}")]
    Format(#[from] FormatError),

    /// API key has the wrong length or charset
    #[error("Malformed API key")]
    InvalidKey,

    /// Subdomain does not match the label grammar
    #[error("Bad subdomain")]
    InvalidSubdomain,

    /// TXT payload has the wrong length or charset
    #[error("Bad TXT")]
    InvalidRecordPayload,

    /// Source address is outside every allowed range
    #[error("Update not allowed from {0}")]
    SourceNotAllowed(IpAddr),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from the identifier parser
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}
