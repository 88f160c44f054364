//! mpdc CLI
//!
//! Command-line interface for querying an MPD daemon.

use clap::{Parser, Subcommand};
use mpdc::{Client, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// MPD command-line client
#[derive(Parser, Debug)]
#[command(name = "mpdc")]
#[command(about = "Query a music player daemon over its line protocol")]
#[command(version)]
struct Args {
    /// Daemon hostname
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Daemon port
    #[arg(short, long, default_value = "6600")]
    port: u16,

    /// Connection password, if the daemon requires one
    #[arg(long, default_value = "")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the daemon is responsive
    Ping,

    /// Show the playback status
    Status,

    /// Show daemon-wide statistics
    Stats,

    /// Show the currently playing song
    CurrentSong,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mpdc=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .password(&args.password)
        .build();

    let mut client = match Client::connect(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("failed to connect to {}: {}", config.addr(), e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Commands::Ping => client.ping().map(|()| println!("OK")),
        Commands::Status => client.status().map(|status| println!("{status:#?}")),
        Commands::Stats => client.stats().map(|stats| println!("{stats:#?}")),
        Commands::CurrentSong => client.current_song().map(|song| println!("{song:#?}")),
    };

    if let Err(e) = result {
        tracing::error!("command failed: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = client.close() {
        tracing::debug!("close failed: {}", e);
    }
}
