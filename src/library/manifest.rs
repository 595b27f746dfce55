//! `playlist.toml` manifest parsing.
//!
//! The manifest fixes the playlist order and carries display metadata; the
//! audio file and cover art are found by naming convention relative to the
//! configured asset directories (`<music_dir>/<name>.mp3`,
//! `<images_dir>/<name>.jpg`).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::AudioFile;
use serde::Deserialize;

use crate::config::LibrarySettings;

use super::model::Track;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "track")]
    tracks: Vec<ManifestTrack>,
}

#[derive(Debug, Deserialize)]
struct ManifestTrack {
    name: String,
    display_name: Option<String>,
    #[serde(default)]
    artist: String,
}

/// Audio asset path for a track name: `<music_dir>/<name>.mp3`.
pub(super) fn audio_path(settings: &LibrarySettings, name: &str) -> PathBuf {
    Path::new(&settings.music_dir).join(format!("{name}.mp3"))
}

/// Cover art path for a track name: `<images_dir>/<name>.jpg`.
pub(super) fn cover_path(settings: &LibrarySettings, name: &str) -> PathBuf {
    Path::new(&settings.images_dir).join(format!("{name}.jpg"))
}

/// Read the track duration from the audio file, if the file is readable.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
}

/// Load the playlist manifest at `path`.
///
/// Returns `Ok(None)` when the manifest file does not exist, so callers can
/// fall back to scanning the music directory.
pub fn load_playlist(
    path: &Path,
    settings: &LibrarySettings,
) -> Result<Option<Vec<Track>>, toml::de::Error> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Ok(None);
    };

    let manifest: Manifest = toml::from_str(&raw)?;
    let tracks = manifest
        .tracks
        .into_iter()
        .map(|t| {
            let audio = audio_path(settings, &t.name);
            let cover = cover_path(settings, &t.name);
            let duration = probe_duration(&audio);
            Track {
                display_name: t.display_name.unwrap_or_else(|| t.name.clone()),
                artist: t.artist,
                audio_path: audio,
                cover_path: cover,
                duration,
                name: t.name,
            }
        })
        .collect();

    Ok(Some(tracks))
}
