//! Error types for mpdc
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MpdError
pub type Result<T> = std::result::Result<T, MpdError>;

/// Unified error type for mpdc operations
#[derive(Debug, Error)]
pub enum MpdError {
    // -------------------------------------------------------------------------
    // Stream Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// The daemon rejected the command with an ACK line.
    /// Carries the diagnostic text after the ACK token, verbatim.
    #[error("command rejected by daemon: {message}")]
    Rejected { message: String },

    /// A response line had no `key: value` separator.
    #[error("malformed response line: {line:?}")]
    MalformedLine { line: String },

    /// A field value could not be parsed into the field's declared kind.
    #[error("cannot parse {value:?} as {kind} for field {field}")]
    Coercion {
        field: String,
        value: String,
        kind: &'static str,
    },

    // -------------------------------------------------------------------------
    // Handshake Errors
    // -------------------------------------------------------------------------
    /// The daemon's greeting line did not start with `OK`.
    #[error("unexpected daemon banner: {banner:?}")]
    Handshake { banner: String },
}
