//! Response decoder
//!
//! Drains field lines from a [`LineStream`] into a [`Record`] until a
//! sentinel line terminates the response.
//!
//! The decoder is a three-state machine: it starts in *Reading*, and each
//! line either keeps it there (a field line), moves it to *Success* (a line
//! starting with `OK`) or to *Failure* (a line starting with `ACK`, a
//! malformed or uncoercible field line, or a stream error). Terminal states
//! map onto `Ok(())` / `Err(_)`; on failure the record keeps every field
//! set before the fault.

use crate::error::{MpdError, Result};

use super::field::map_key;
use super::schema::Record;
use super::{ACK, OK};

/// Sequential line transport for one protocol connection
///
/// `read_line` must strip exactly one trailing newline (and a preceding
/// `\r` if present) so sentinel and key comparisons see the bare line.
pub trait LineStream {
    /// Read the next response line, without its terminator
    fn read_line(&mut self) -> Result<String>;

    /// Send one command line; the terminator is added by the transport
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Receiver for non-fatal decoding diagnostics
///
/// Injected rather than ambient so tests can observe skipped fields
/// deterministically.
pub trait DiagnosticSink {
    /// Called for each response line whose mapped identifier is not in the
    /// target schema; the line is skipped, not an error
    fn unknown_field(&mut self, key: &str, field: &str);
}

/// Production sink: reports skipped fields through `tracing`
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn unknown_field(&mut self, key: &str, field: &str) {
        tracing::debug!("skipping unknown response field {key:?} (mapped to {field})");
    }
}

/// Decode one response into `record`, logging skipped fields via `tracing`
pub fn decode_response<R, S>(record: &mut R, stream: &mut S) -> Result<()>
where
    R: Record,
    S: LineStream + ?Sized,
{
    decode_response_with(record, stream, &mut LogSink)
}

/// Decode one response into `record` with an explicit diagnostic sink.
///
/// Consumes lines up to and including the terminating sentinel. Returns
/// `Ok(())` on `OK`; any fatal condition stops decoding immediately and
/// leaves the partially populated record with the caller:
///
/// - stream errors propagate unchanged ([`MpdError::Io`]);
/// - an `ACK` line becomes [`MpdError::Rejected`] carrying the daemon's
///   diagnostic text verbatim;
/// - a field line without a colon is [`MpdError::MalformedLine`];
/// - an uncoercible value is [`MpdError::Coercion`].
///
/// Lines whose key maps to a field the schema does not model are reported
/// to `diagnostics` and skipped. Repeated keys overwrite: last write wins.
pub fn decode_response_with<R, S>(
    record: &mut R,
    stream: &mut S,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<()>
where
    R: Record,
    S: LineStream + ?Sized,
{
    loop {
        let line = stream.read_line()?;

        // Sentinels take precedence over field parsing, colon or not.
        if line.starts_with(OK) {
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix(ACK) {
            return Err(MpdError::Rejected {
                message: rest.strip_prefix(' ').unwrap_or(rest).to_string(),
            });
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(MpdError::MalformedLine { line });
        };
        let value = value.trim();

        let field = map_key(key);
        match record.slot(&field) {
            Some(slot) => slot.store(&field, value)?,
            None => diagnostics.unknown_field(key, &field),
        }
    }
}
