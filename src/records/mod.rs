//! Response record types
//!
//! One plain struct per response shape, each implementing
//! [`Record`](crate::protocol::Record) with a static field table.

mod song;
mod stats;
mod status;

pub use song::SongInfo;
pub use stats::ServerStats;
pub use status::PlaybackStatus;
