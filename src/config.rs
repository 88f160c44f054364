//! Configuration for mpdc
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Connection configuration for a [`Client`](crate::Client)
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Daemon Address
    // -------------------------------------------------------------------------
    /// Daemon hostname or IP address
    pub host: String,

    /// Daemon TCP port (MPD listens on 6600 by default)
    pub port: u16,

    // -------------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------------
    /// Password sent after the handshake; empty means no `password` command
    pub password: String,

    // -------------------------------------------------------------------------
    // Socket Options
    // -------------------------------------------------------------------------
    /// Socket read timeout; `None` blocks indefinitely (protocol has no
    /// deadline of its own, so a decode may wait forever without this)
    pub read_timeout: Option<Duration>,

    /// Socket write timeout; `None` blocks indefinitely
    pub write_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6600,
            password: String::new(),
            read_timeout: None,
            write_timeout: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The `host:port` string used for dialing
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the daemon hostname
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the daemon port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the connection password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the socket read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = Some(timeout);
        self
    }

    /// Set the socket write timeout
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.config.write_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
