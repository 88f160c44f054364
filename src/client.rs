//! Client connection
//!
//! Owns the TCP connection to the daemon and drives the strict
//! request-then-full-response exchange: exactly one command in flight,
//! enforced by `&mut self` on every operation.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;

use crate::config::Config;
use crate::error::{MpdError, Result};
use crate::protocol::{self, decode_response, LineStream, Record};
use crate::records::{PlaybackStatus, ServerStats, SongInfo};

/// A synchronous connection to one MPD daemon
#[derive(Debug)]
pub struct Client {
    /// TCP stream reader (buffered for line framing)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered, flushed per command)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Client {
    /// Dial the daemon, read its banner and authenticate if configured
    ///
    /// The daemon greets with a single `OK MPD <version>` line; anything
    /// else fails the handshake. When `config.password` is non-empty a
    /// `password` command is issued before returning.
    pub fn connect(config: &Config) -> Result<Self> {
        let stream = TcpStream::connect(config.addr())?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Commands are tiny; don't let Nagle hold them back.
        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.read_timeout)?;
        stream.set_write_timeout(config.write_timeout)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let mut client = Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
            peer_addr,
        };

        let banner = client.read_line()?;
        if !banner.starts_with(protocol::OK) {
            return Err(MpdError::Handshake { banner });
        }
        tracing::debug!("connected to {} ({})", client.peer_addr, banner);

        if !config.password.is_empty() {
            client.exchange::<()>(&format!("password {}", config.password))?;
        }

        Ok(client)
    }

    /// Fetch the daemon's playback status
    pub fn status(&mut self) -> Result<PlaybackStatus> {
        self.exchange("status")
    }

    /// Fetch daemon-wide statistics
    pub fn stats(&mut self) -> Result<ServerStats> {
        self.exchange("stats")
    }

    /// Fetch metadata for the song currently playing
    pub fn current_song(&mut self) -> Result<SongInfo> {
        self.exchange("currentsong")
    }

    /// Check that the daemon is responsive
    pub fn ping(&mut self) -> Result<()> {
        self.exchange::<()>("ping")
    }

    /// Tell the daemon to close the connection and drop it
    ///
    /// The daemon terminates without a response line, so nothing is decoded.
    pub fn close(mut self) -> Result<()> {
        self.write_line("close")
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Issue one command and decode its full response
    ///
    /// The record starts zero-valued; on error the caller only sees the
    /// error, never the partial record — partial results matter only to
    /// callers driving [`decode_response`] themselves.
    fn exchange<R: Record>(&mut self, command: &str) -> Result<R> {
        self.write_line(command)?;
        let mut record = R::default();
        decode_response(&mut record, self)?;
        Ok(record)
    }
}

impl LineStream for Client {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "connection closed by daemon",
            )
            .into());
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        tracing::trace!("<= {}", line);
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        tracing::trace!("=> {}", line);
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
