//! Playback status record (`status` command)

use crate::protocol::{FieldSlot, Record};

/// Snapshot of the daemon's playback state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackStatus {
    /// Mixer volume 0-100, or -1 when no mixer is available
    pub volume: i64,
    pub repeat: bool,
    pub random: bool,
    pub single: bool,
    pub consume: bool,
    /// Playlist version number
    pub playlist: u64,
    pub playlist_length: u64,
    /// Mix-ramp threshold in decibels
    pub mixrampdb: f64,
    /// `play`, `stop` or `pause`
    pub state: String,
    /// Position of the current song in the playlist
    pub song: u64,
    pub song_id: u64,
    pub next_song: u64,
    pub next_song_id: u64,
    /// Elapsed and total seconds of the current song
    pub time: [u64; 2],
    /// Elapsed time with sub-second precision, kept as sent
    pub elapsed: String,
    /// Instantaneous bitrate in kbps
    pub bitrate: u64,
    /// Audio format as `samplerate:bits:channels`
    pub audio: String,
}

impl Record for PlaybackStatus {
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        use FieldSlot::*;
        Some(match field {
            "Volume" => SignedInt(&mut self.volume),
            "Repeat" => Boolean(&mut self.repeat),
            "Random" => Boolean(&mut self.random),
            "Single" => Boolean(&mut self.single),
            "Consume" => Boolean(&mut self.consume),
            "Playlist" => UnsignedInt(&mut self.playlist),
            "PlaylistLength" => UnsignedInt(&mut self.playlist_length),
            "MixRampDB" => Float(&mut self.mixrampdb),
            "State" => Text(&mut self.state),
            "Song" => UnsignedInt(&mut self.song),
            "SongId" => UnsignedInt(&mut self.song_id),
            "NextSong" => UnsignedInt(&mut self.next_song),
            "NextSongId" => UnsignedInt(&mut self.next_song_id),
            "Time" => UnsignedPair(&mut self.time),
            "Elapsed" => Text(&mut self.elapsed),
            "Bitrate" => UnsignedInt(&mut self.bitrate),
            "Audio" => Text(&mut self.audio),
            _ => return None,
        })
    }
}
