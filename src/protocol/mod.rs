//! Protocol Module
//!
//! Defines the MPD wire protocol as seen by the client.
//!
//! ## Protocol Format (line-oriented ASCII)
//!
//! ### Request Format
//! ```text
//! command [args...]\n
//! ```
//!
//! ### Response Format
//! ```text
//! key: value\n        (zero or more field lines)
//! key: value\n
//! OK\n                (success sentinel)
//! ```
//! or, on rejection:
//! ```text
//! ACK [error@command_listNum] {current_command} message\n
//! ```
//!
//! ### Conventions
//! - Keys are lowercase with underscores, with two documented mixed-case
//!   exceptions (`MILDRED_SONGID`, `Last-Modified`).
//! - A key never contains a colon; a value may (the two-part time/audio
//!   values use an internal colon).
//! - A line beginning with `OK` or `ACK` terminates the response and is
//!   never parsed as a field line.

mod decoder;
mod field;
mod schema;

pub use decoder::{decode_response, decode_response_with, DiagnosticSink, LineStream, LogSink};
pub use field::map_key;
pub use schema::{FieldSlot, Record, ValueKind};

/// Success sentinel token
pub const OK: &str = "OK";

/// Error sentinel token
pub const ACK: &str = "ACK";
