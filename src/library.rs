//! Playlist loading.
//!
//! The playlist is fixed at startup: either a `playlist.toml` manifest whose
//! asset paths are derived from each track's name, or a scan of the music
//! directory when no manifest exists.

mod manifest;
mod model;
mod scan;

pub use manifest::load_playlist;
pub use model::*;
pub use scan::scan;

#[cfg(test)]
mod tests;
