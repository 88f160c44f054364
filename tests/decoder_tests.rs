//! Tests for the response decoder
//!
//! These tests verify:
//! - Full decoding of each record schema
//! - Sentinel handling (OK, ACK, precedence over field parsing)
//! - Forward-compatible skipping of unknown fields
//! - Fatal coercion errors with partial records preserved
//! - Stream error propagation

use std::collections::VecDeque;

use mpdc::protocol::{decode_response, decode_response_with, DiagnosticSink, LineStream};
use mpdc::records::{PlaybackStatus, ServerStats, SongInfo};
use mpdc::MpdError;

// =============================================================================
// Helper Types
// =============================================================================

/// A line stream replaying a canned script; running out of lines behaves
/// like the daemon closing the connection.
struct ScriptedStream {
    lines: VecDeque<String>,
}

impl ScriptedStream {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl LineStream for ScriptedStream {
    fn read_line(&mut self) -> mpdc::Result<String> {
        self.lines.pop_front().ok_or_else(|| {
            MpdError::from(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "connection closed by daemon",
            ))
        })
    }

    fn write_line(&mut self, _line: &str) -> mpdc::Result<()> {
        Ok(())
    }
}

/// Diagnostic sink recording every skipped field
#[derive(Default)]
struct CollectSink {
    skipped: Vec<(String, String)>,
}

impl DiagnosticSink for CollectSink {
    fn unknown_field(&mut self, key: &str, field: &str) {
        self.skipped.push((key.to_string(), field.to_string()));
    }
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_status_round_trip() {
    let mut stream = ScriptedStream::new(&[
        "volume: 57",
        "repeat: 0",
        "random: 1",
        "single: 0",
        "consume: 0",
        "playlist: 4",
        "playlistlength: 12",
        "mixrampdb: -17.5",
        "state: play",
        "song: 3",
        "songid: 1002",
        "time: 45:213",
        "elapsed: 45.123",
        "bitrate: 320",
        "audio: 44100:16:2",
        "OK",
    ]);

    let mut status = PlaybackStatus::default();
    decode_response(&mut status, &mut stream).unwrap();

    assert_eq!(status.volume, 57);
    assert!(!status.repeat);
    assert!(status.random);
    assert!(!status.single);
    assert!(!status.consume);
    assert_eq!(status.playlist, 4);
    assert_eq!(status.playlist_length, 12);
    assert!((status.mixrampdb - (-17.5)).abs() < f64::EPSILON);
    assert_eq!(status.state, "play");
    assert_eq!(status.song, 3);
    assert_eq!(status.song_id, 1002);
    assert_eq!(status.time, [45, 213]);
    assert_eq!(status.elapsed, "45.123");
    assert_eq!(status.bitrate, 320);
    assert_eq!(status.audio, "44100:16:2");
}

#[test]
fn test_stats_round_trip() {
    let mut stream = ScriptedStream::new(&[
        "uptime: 9514",
        "playtime: 886",
        "artists: 55",
        "albums: 74",
        "songs: 808",
        "db_playtime: 211102",
        "db_update: 1691337945",
        "OK",
    ]);

    let mut stats = ServerStats::default();
    decode_response(&mut stats, &mut stream).unwrap();

    assert_eq!(stats.uptime, 9514);
    assert_eq!(stats.playtime, 886);
    assert_eq!(stats.artists, 55);
    assert_eq!(stats.albums, 74);
    assert_eq!(stats.songs, 808);
    assert_eq!(stats.db_playtime, 211102);
    assert_eq!(stats.db_update, 1691337945);
}

#[test]
fn test_song_round_trip() {
    let mut stream = ScriptedStream::new(&[
        "file: music/album/03 - song.flac",
        "Last-Modified: 2023-08-06T14:05:45Z",
        "Time: 214",
        "Title: Some Song",
        "Artist: Some Artist",
        "Date: 2003",
        "Album: Some Album",
        "Track: 3",
        "AlbumArtist: Some Artist",
        "Disc: 1",
        "Pos: 3",
        "Id: 1002",
        "MILDRED_SONGID: a1b2c3",
        "Name: Stream Name",
        "OK",
    ]);

    let mut song = SongInfo::default();
    decode_response(&mut song, &mut stream).unwrap();

    assert_eq!(song.file, "music/album/03 - song.flac");
    assert_eq!(song.last_modified, "2023-08-06T14:05:45Z");
    assert_eq!(song.time, 214);
    assert_eq!(song.title, "Some Song");
    assert_eq!(song.artist, "Some Artist");
    assert_eq!(song.date, 2003);
    assert_eq!(song.album, "Some Album");
    assert_eq!(song.track, 3);
    assert_eq!(song.album_artist, "Some Artist");
    assert_eq!(song.disc, 1);
    assert_eq!(song.pos, 3);
    assert_eq!(song.id, 1002);
    assert_eq!(song.mildred_song_id, "a1b2c3");
    assert_eq!(song.name, "Stream Name");
}

#[test]
fn test_repeated_key_last_write_wins() {
    let mut stream = ScriptedStream::new(&["volume: 10", "volume: 90", "OK"]);

    let mut status = PlaybackStatus::default();
    decode_response(&mut status, &mut stream).unwrap();

    assert_eq!(status.volume, 90);
}

// =============================================================================
// Sentinel Tests
// =============================================================================

#[test]
fn test_empty_response() {
    let mut stream = ScriptedStream::new(&["OK"]);

    let mut status = PlaybackStatus::default();
    decode_response(&mut status, &mut stream).unwrap();

    assert_eq!(status, PlaybackStatus::default());
}

#[test]
fn test_rejection_preserves_diagnostic_verbatim() {
    let mut stream = ScriptedStream::new(&["ACK [5@0] {play} malformed song index"]);

    let mut status = PlaybackStatus::default();
    let err = decode_response(&mut status, &mut stream).unwrap_err();

    match err {
        MpdError::Rejected { message } => {
            assert_eq!(message, "[5@0] {play} malformed song index");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(status, PlaybackStatus::default());
}

#[test]
fn test_rejection_after_fields_keeps_partial_record() {
    let mut stream = ScriptedStream::new(&["volume: 42", "ACK [2@0] {status} boom"]);

    let mut status = PlaybackStatus::default();
    let err = decode_response(&mut status, &mut stream).unwrap_err();

    assert!(matches!(err, MpdError::Rejected { .. }));
    assert_eq!(status.volume, 42);
}

#[test]
fn test_terminator_precedence_over_field_parsing() {
    // Sentinel lines may contain colons; they must still terminate.
    let mut stream = ScriptedStream::new(&["OK volume: 99"]);
    let mut status = PlaybackStatus::default();
    decode_response(&mut status, &mut stream).unwrap();
    assert_eq!(status.volume, 0);

    let mut stream = ScriptedStream::new(&["ACK: not a field"]);
    let mut status = PlaybackStatus::default();
    let err = decode_response(&mut status, &mut stream).unwrap_err();
    assert!(matches!(err, MpdError::Rejected { .. }));
}

// =============================================================================
// Unknown Field Tests
// =============================================================================

#[test]
fn test_unknown_field_skipped_without_error() {
    let mut stream = ScriptedStream::new(&["xfade: 5", "volume: 57", "OK"]);

    let mut status = PlaybackStatus::default();
    let mut sink = CollectSink::default();
    decode_response_with(&mut status, &mut stream, &mut sink).unwrap();

    assert_eq!(status.volume, 57);
    assert_eq!(sink.skipped, vec![("xfade".to_string(), "Xfade".to_string())]);
}

#[test]
fn test_unknown_field_never_mutates_record() {
    let mut stream = ScriptedStream::new(&["duration: 213.907", "OK"]);

    let mut status = PlaybackStatus::default();
    let mut sink = CollectSink::default();
    decode_response_with(&mut status, &mut stream, &mut sink).unwrap();

    assert_eq!(status, PlaybackStatus::default());
    assert_eq!(sink.skipped.len(), 1);
}

// =============================================================================
// Malformed Line Tests
// =============================================================================

#[test]
fn test_line_without_colon_is_fatal() {
    let mut stream = ScriptedStream::new(&["volume 57", "OK"]);

    let mut status = PlaybackStatus::default();
    let err = decode_response(&mut status, &mut stream).unwrap_err();

    match err {
        MpdError::MalformedLine { line } => assert_eq!(line, "volume 57"),
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

// =============================================================================
// Coercion Tests
// =============================================================================

/// Decode against PlaybackStatus and expect a Coercion error naming `field`
fn assert_coercion_failure(lines: &[&str], field: &str, value: &str) -> PlaybackStatus {
    let mut stream = ScriptedStream::new(lines);
    let mut status = PlaybackStatus::default();
    let err = decode_response(&mut status, &mut stream).unwrap_err();

    match err {
        MpdError::Coercion {
            field: got_field,
            value: got_value,
            ..
        } => {
            assert_eq!(got_field, field);
            assert_eq!(got_value, value);
        }
        other => panic!("expected Coercion, got {other:?}"),
    }
    status
}

#[test]
fn test_unsigned_int_coercion_failure() {
    assert_coercion_failure(&["bitrate: abc", "OK"], "Bitrate", "abc");
}

#[test]
fn test_signed_int_coercion_failure() {
    assert_coercion_failure(&["volume: fifty", "OK"], "Volume", "fifty");
}

#[test]
fn test_boolean_coercion_failure() {
    assert_coercion_failure(&["repeat: yes", "OK"], "Repeat", "yes");
}

#[test]
fn test_float_coercion_failure() {
    assert_coercion_failure(&["mixrampdb: loud", "OK"], "MixRampDB", "loud");
}

#[test]
fn test_pair_missing_colon_failure() {
    assert_coercion_failure(&["time: 3", "OK"], "Time", "3");
}

#[test]
fn test_pair_extra_colon_failure() {
    assert_coercion_failure(&["time: 45:213:7", "OK"], "Time", "45:213:7");
}

#[test]
fn test_pair_non_numeric_half_failure() {
    assert_coercion_failure(&["time: 45:soon", "OK"], "Time", "45:soon");
}

#[test]
fn test_coercion_failure_keeps_previous_fields() {
    let status = assert_coercion_failure(
        &["volume: 57", "state: play", "bitrate: abc", "OK"],
        "Bitrate",
        "abc",
    );

    assert_eq!(status.volume, 57);
    assert_eq!(status.state, "play");
    assert_eq!(status.bitrate, 0);
}

// =============================================================================
// Stream Error Tests
// =============================================================================

#[test]
fn test_stream_error_before_terminator() {
    let mut stream = ScriptedStream::new(&["volume: 57", "state: play"]);

    let mut status = PlaybackStatus::default();
    let err = decode_response(&mut status, &mut stream).unwrap_err();

    match err {
        MpdError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("expected Io, got {other:?}"),
    }
    // Fields parsed before the failure survive.
    assert_eq!(status.volume, 57);
    assert_eq!(status.state, "play");
}
