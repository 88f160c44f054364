//! # mpdc
//!
//! A synchronous client for the MPD line protocol with:
//! - Typed decoding of `key: value` responses into record structs
//! - One generic decoder shared by every response schema
//! - Forward-compatible skipping of fields the client does not model
//! - Blocking TCP transport, one command in flight at a time
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Client                                │
//! │        (TCP connect, handshake, command issuance)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ LineStream
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Response Decoder                            │
//! │     (sentinel detection, key/value split, coercion)          │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!    ┌──────────────┐              ┌─────────────────┐
//!    │ Field Mapper │              │     Records     │
//!    │ (key→field)  │              │ (status, stats, │
//!    └──────────────┘              │   song info)    │
//!                                  └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod records;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MpdError, Result};
pub use config::Config;
pub use client::Client;
pub use records::{PlaybackStatus, ServerStats, SongInfo};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mpdc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
