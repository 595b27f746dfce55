//! Utilities for creating `rodio` sinks from `Track` values.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::library::Track;

/// Create a paused `Sink` for `track` that starts playback at `start_at`.
///
/// Returns `None` when the file cannot be opened or decoded; playback
/// failures stay silent rather than taking the UI down.
pub(super) fn create_sink_at(
    handle: &OutputStream,
    track: &Track,
    start_at: Duration,
) -> Option<Sink> {
    let file = File::open(&track.audio_path).ok()?;

    let source = Decoder::new(BufReader::new(file))
        .ok()?
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Some(sink)
}
