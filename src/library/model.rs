use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone)]
pub struct Track {
    /// Internal name the asset paths are derived from.
    pub name: String,
    pub display_name: String,
    pub artist: String,
    pub audio_path: PathBuf,
    pub cover_path: PathBuf,
    pub duration: Option<Duration>,
}

impl Track {
    /// Playlist entry text: `Display Name - Artist`.
    pub fn playlist_entry(&self) -> String {
        if self.artist.trim().is_empty() {
            self.display_name.clone()
        } else {
            format!("{} - {}", self.display_name, self.artist)
        }
    }
}
