//! Audio playback subsystem.
//!
//! A dedicated thread owns the `rodio` output stream and sink; the rest of
//! the player talks to it through `AudioCmd` messages and observes progress
//! through the shared `PlaybackHandle`.

mod advance;
mod player;
mod sink;
mod thread;
mod types;

pub use advance::{next_index, prev_index};
pub use player::AudioPlayer;
pub use types::*;

#[cfg(test)]
mod tests;
