//! Song metadata record (`currentsong` command)

use crate::protocol::{FieldSlot, Record};

/// Metadata for one song, as stored in the daemon's database
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongInfo {
    /// Path of the song relative to the music directory
    pub file: String,
    pub last_modified: String,
    /// Duration in whole seconds
    pub time: u64,
    pub title: String,
    pub artist: String,
    pub date: u64,
    pub album: String,
    pub track: u64,
    pub album_artist: String,
    pub disc: u64,
    /// Position in the current playlist
    pub pos: u64,
    pub id: u64,
    /// Identifier attached by the MILDRED extension, opaque to the client
    pub mildred_song_id: String,
    /// Display name, set for streams without tags
    pub name: String,
}

impl Record for SongInfo {
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        use FieldSlot::*;
        Some(match field {
            "File" => Text(&mut self.file),
            "LastModified" => Text(&mut self.last_modified),
            "Time" => UnsignedInt(&mut self.time),
            "Title" => Text(&mut self.title),
            "Artist" => Text(&mut self.artist),
            "Date" => UnsignedInt(&mut self.date),
            "Album" => Text(&mut self.album),
            "Track" => UnsignedInt(&mut self.track),
            "AlbumArtist" => Text(&mut self.album_artist),
            "Disc" => UnsignedInt(&mut self.disc),
            "Pos" => UnsignedInt(&mut self.pos),
            "Id" => UnsignedInt(&mut self.id),
            "MildredSongId" => Text(&mut self.mildred_song_id),
            "Name" => Text(&mut self.name),
            _ => return None,
        })
    }
}
