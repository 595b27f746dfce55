//! Player model types: `App`, `PlaybackState` and scrub math.

use std::time::Duration;

use ratatui::layout::Rect;

use crate::audio::{PlaybackHandle, next_index, prev_index};
use crate::library::Track;
use crate::theme::Theme;

/// The playback state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// The audio command a model decision asks the runtime to issue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackAction {
    /// Start the track at this index from the beginning.
    Start(usize),
    Resume,
    Pause,
    /// Nothing to do (e.g. empty playlist).
    None,
}

/// The main player model. Single owner of playlist position, playback
/// flags, drag state, volume and theme.
pub struct App {
    pub tracks: Vec<Track>,
    /// Invariant: `current < tracks.len()` whenever the playlist is
    /// non-empty; prev/next wrap modulo the playlist length.
    pub current: usize,
    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,
    pub volume: f32,
    pub theme: Theme,
    /// True between mouse-down on the progress bar and the matching release.
    pub dragging: bool,
}

impl App {
    /// Create a new `App` over a fixed playlist, positioned on track 0.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: 0,
            playback: PlaybackState::Stopped,
            playback_handle: None,
            volume: 1.0,
            theme: Theme::default(),
            dragging: false,
        }
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Duration of the current track, when known.
    pub fn current_duration(&self) -> Option<Duration> {
        self.current_track().and_then(|t| t.duration)
    }

    /// Toggle play/pause. Starting from `Stopped` plays the current track.
    /// Mutates the model optimistically; the next playback sync corrects it
    /// if the audio thread disagrees.
    pub fn toggle_playback(&mut self) -> PlaybackAction {
        match self.playback {
            PlaybackState::Playing => {
                self.playback = PlaybackState::Paused;
                PlaybackAction::Pause
            }
            PlaybackState::Paused => {
                self.playback = PlaybackState::Playing;
                PlaybackAction::Resume
            }
            PlaybackState::Stopped => {
                if self.has_tracks() {
                    self.playback = PlaybackState::Playing;
                    PlaybackAction::Start(self.current)
                } else {
                    PlaybackAction::None
                }
            }
        }
    }

    /// Advance to the next track (wrapping) and play it.
    pub fn next_track(&mut self) -> PlaybackAction {
        match next_index(self.current, self.tracks.len()) {
            Some(i) => {
                self.current = i;
                self.playback = PlaybackState::Playing;
                PlaybackAction::Start(i)
            }
            None => PlaybackAction::None,
        }
    }

    /// Retreat to the previous track (wrapping) and play it.
    pub fn previous_track(&mut self) -> PlaybackAction {
        match prev_index(self.current, self.tracks.len()) {
            Some(i) => {
                self.current = i;
                self.playback = PlaybackState::Playing;
                PlaybackAction::Start(i)
            }
            None => PlaybackAction::None,
        }
    }

    /// Handle a click on playlist row `idx`. Clicking the active entry is a
    /// no-op; any other valid row becomes current and starts playing.
    pub fn select_from_playlist(&mut self, idx: usize) -> PlaybackAction {
        if idx >= self.tracks.len() || idx == self.current {
            return PlaybackAction::None;
        }
        self.current = idx;
        self.playback = PlaybackState::Playing;
        PlaybackAction::Start(idx)
    }

    /// Nudge the volume by `delta`, clamped to [0, 1].
    pub fn step_volume(&mut self, delta: f32) -> f32 {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
        self.volume
    }

    /// Set the volume from a pointer fraction in [0, 1].
    pub fn set_volume(&mut self, level: f32) -> f32 {
        self.volume = level.clamp(0.0, 1.0);
        self.volume
    }

    /// Flip the theme and return the new value (for persistence).
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Start a scrub gesture at `column` over the progress bar `area`.
    /// Returns the immediate seek target, or `None` when the duration is
    /// unknown (the seek is skipped, the gesture still begins).
    pub fn begin_scrub(&mut self, column: u16, area: Rect) -> Option<Duration> {
        self.dragging = true;
        self.scrub_seek(column, area)
    }

    /// Continue a scrub gesture; a no-op unless one is in progress. The
    /// column clamps to the bar, so dragging past either edge pins the seek
    /// to the track boundary.
    pub fn continue_scrub(&mut self, column: u16, area: Rect) -> Option<Duration> {
        if !self.dragging {
            return None;
        }
        self.scrub_seek(column, area)
    }

    /// Release the scrub gesture. Always runs on release regardless of how
    /// the gesture ends.
    pub fn end_scrub(&mut self) {
        self.dragging = false;
    }

    fn scrub_seek(&self, column: u16, area: Rect) -> Option<Duration> {
        seek_target(scrub_fraction(column, area), self.current_duration())
    }
}

/// Fraction of the bar covered at `column`, clamped to [0, 1]. Columns left
/// of the bar map to 0.0, columns past the right edge to 1.0.
pub fn scrub_fraction(column: u16, area: Rect) -> f64 {
    if area.width == 0 {
        return 0.0;
    }
    let rel = column.saturating_sub(area.x).min(area.width);
    f64::from(rel) / f64::from(area.width)
}

/// Absolute seek position for a bar fraction. `None` when the duration is
/// unknown or zero, in which case the seek must be skipped.
pub fn seek_target(fraction: f64, duration: Option<Duration>) -> Option<Duration> {
    let duration = duration.filter(|d| !d.is_zero())?;
    Some(duration.mul_f64(fraction.clamp(0.0, 1.0)))
}
