//! Field name mapping
//!
//! Translates protocol keys into record field identifiers.

use std::borrow::Cow;

/// Keys whose field identifier is not a mechanical transform of the key.
///
/// Matched case-sensitively, before the default transform. The last two
/// entries are the protocol's documented mixed-case keys; everything else
/// is a lowercase token whose identifier breaks the title-casing rule.
const IRREGULAR: &[(&str, &str)] = &[
    ("playlistlength", "PlaylistLength"),
    ("songid", "SongId"),
    ("nextsongid", "NextSongId"),
    ("nextsong", "NextSong"),
    ("mixrampdb", "MixRampDB"),
    ("playtime", "PlayTime"),
    ("db_playtime", "DBPlayTime"),
    ("db_update", "DBUpdate"),
    ("MILDRED_SONGID", "MildredSongId"),
    ("Last-Modified", "LastModified"),
];

/// Map a protocol key to its record field identifier.
///
/// Every input produces some identifier; whether it names a real field is
/// decided by the schema lookup during decoding, not here.
pub fn map_key(key: &str) -> Cow<'static, str> {
    for (proto, field) in IRREGULAR {
        if *proto == key {
            return Cow::Borrowed(field);
        }
    }
    Cow::Owned(title_case(key))
}

/// Default transform: capitalize the first letter of each `_`/`-`-delimited
/// segment and concatenate (`album_artist` -> `AlbumArtist`, `file` -> `File`).
fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_segment_start = true;
    for ch in key.chars() {
        if ch == '_' || ch == '-' {
            at_segment_start = true;
            continue;
        }
        if at_segment_start {
            out.extend(ch.to_uppercase());
            at_segment_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}
