use std::path::Path;

use crate::app::App;
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config::{LibrarySettings, Settings};
use crate::library::{self, Track};
use crate::theme;

/// Load the fixed playlist: the manifest when present, otherwise a scan of
/// the music directory.
pub fn load_tracks(settings: &LibrarySettings) -> Vec<Track> {
    match library::load_playlist(Path::new(&settings.playlist_file), settings) {
        Ok(Some(tracks)) => tracks,
        Ok(None) => library::scan(settings),
        Err(e) => {
            eprintln!("vivace: invalid playlist manifest, scanning music dir: {e}");
            library::scan(settings)
        }
    }
}

/// Startup sequence once app and audio thread exist: initial volume, track 0
/// prepared without autoplay, persisted theme restored.
pub fn apply_startup_state(
    app: &mut App,
    audio_player: &AudioPlayer,
    settings: &Settings,
    state_path: Option<&Path>,
) {
    app.volume = settings.playback.initial_volume.clamp(0.0, 1.0);
    let _ = audio_player.send(AudioCmd::SetVolume(app.volume));

    if app.has_tracks() {
        let _ = audio_player.send(AudioCmd::Load(app.current));
    }

    if let Some(path) = state_path {
        if let Some(saved) = theme::load_theme(path) {
            app.theme = saved;
        }
    }
}
