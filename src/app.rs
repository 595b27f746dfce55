//! Application model: exposes the player model used by the TUI and runtime.
//!
//! The `App` model owns the playlist position, playback and drag state,
//! volume and theme; the runtime translates its decisions into audio
//! commands and redraws.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
