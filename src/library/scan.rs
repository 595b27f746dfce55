use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::manifest::cover_path;
use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// Build a playlist by scanning the music directory.
///
/// Used when no `playlist.toml` manifest exists. The track name comes from
/// the file stem; display metadata is taken from tags when available. Cover
/// art still follows the naming convention.
pub fn scan(settings: &LibrarySettings) -> Vec<Track> {
    let dir = Path::new(&settings.music_dir);
    let mut tracks: Vec<Track> = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();

        let mut display_name = name.clone();
        let mut artist = String::new();
        let mut duration = None;

        if let Ok(tagged) = lofty::read_from_path(path) {
            duration = Some(tagged.properties().duration());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                    if !v.trim().is_empty() {
                        display_name = v.trim().to_string();
                    }
                }
                if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                    let v = v.trim();
                    if !v.is_empty() {
                        artist = v.to_string();
                    }
                }
            }
        }

        tracks.push(Track {
            cover_path: cover_path(settings, &name),
            audio_path: path.to_path_buf(),
            name,
            display_name,
            artist,
            duration,
        });
    }

    tracks.sort_by(|a, b| {
        a.playlist_entry()
            .to_lowercase()
            .cmp(&b.playlist_entry().to_lowercase())
    });
    tracks
}
