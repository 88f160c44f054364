//! Server statistics record (`stats` command)

use crate::protocol::{FieldSlot, Record};

/// Daemon-wide counters and clocks, all in seconds or counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerStats {
    pub uptime: i64,
    /// Time spent playing since daemon start
    pub playtime: i64,
    pub artists: i64,
    pub albums: i64,
    pub songs: i64,
    /// Accumulated duration of every song in the database
    pub db_playtime: i64,
    /// Unix timestamp of the last database update
    pub db_update: i64,
}

impl Record for ServerStats {
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        use FieldSlot::*;
        Some(match field {
            "Uptime" => SignedInt(&mut self.uptime),
            "PlayTime" => SignedInt(&mut self.playtime),
            "Artists" => SignedInt(&mut self.artists),
            "Albums" => SignedInt(&mut self.albums),
            "Songs" => SignedInt(&mut self.songs),
            "DBPlayTime" => SignedInt(&mut self.db_playtime),
            "DBUpdate" => SignedInt(&mut self.db_update),
            _ => return None,
        })
    }
}
