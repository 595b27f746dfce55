//! Audio-related small types and handles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Prepare the track at the given index without starting playback.
    Load(usize),
    /// Start playing the track at the given index from the beginning.
    Play(usize),
    /// Resume the current (prepared or paused) sink.
    Resume,
    /// Pause the current sink.
    Pause,
    /// Seek the current track to an absolute position.
    SeekTo(Duration),
    /// Set output volume in [0, 1].
    SetVolume(f32),
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Currently loaded track index in the playlist (if any).
    pub index: Option<usize>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Whether playback is currently active.
    pub playing: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            elapsed: Duration::ZERO,
            playing: false,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
