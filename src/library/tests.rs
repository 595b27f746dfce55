use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::manifest::{audio_path, cover_path, load_playlist};
use super::scan::scan;
use crate::config::LibrarySettings;

fn settings_in(dir: &Path) -> LibrarySettings {
    LibrarySettings {
        music_dir: dir.join("music").to_string_lossy().into_owned(),
        images_dir: dir.join("images").to_string_lossy().into_owned(),
        ..LibrarySettings::default()
    }
}

#[test]
fn asset_paths_follow_naming_convention() {
    let settings = LibrarySettings {
        music_dir: "music".into(),
        images_dir: "images".into(),
        ..LibrarySettings::default()
    };
    assert_eq!(audio_path(&settings, "hey"), PathBuf::from("music/hey.mp3"));
    assert_eq!(
        cover_path(&settings, "hey"),
        PathBuf::from("images/hey.jpg")
    );
}

#[test]
fn load_playlist_returns_none_when_manifest_missing() {
    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path());
    let loaded = load_playlist(&dir.path().join("playlist.toml"), &settings).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn load_playlist_preserves_order_and_derives_paths() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("playlist.toml");
    fs::write(
        &manifest,
        r#"
[[track]]
name = "hey"
display_name = "Hey"
artist = "Purrple Cat"

[[track]]
name = "summer"
display_name = "Summer"
artist = "Purrple Cat"

[[track]]
name = "ukulele"
"#,
    )
    .unwrap();

    let settings = settings_in(dir.path());
    let tracks = load_playlist(&manifest, &settings).unwrap().unwrap();

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].display_name, "Hey");
    assert_eq!(tracks[0].artist, "Purrple Cat");
    assert_eq!(tracks[0].playlist_entry(), "Hey - Purrple Cat");
    assert!(tracks[0].audio_path.ends_with("music/hey.mp3"));
    assert!(tracks[0].cover_path.ends_with("images/hey.jpg"));
    assert_eq!(tracks[1].name, "summer");

    // Missing display_name falls back to the track name; missing artist
    // leaves the entry text bare.
    assert_eq!(tracks[2].display_name, "ukulele");
    assert_eq!(tracks[2].playlist_entry(), "ukulele");

    // The sample files do not exist, so durations stay unknown.
    assert!(tracks[0].duration.is_none());
}

#[test]
fn load_playlist_rejects_malformed_manifest() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("playlist.toml");
    fs::write(&manifest, "[[track]]\nname = 42\n").unwrap();

    let settings = settings_in(dir.path());
    assert!(load_playlist(&manifest, &settings).is_err());
}

#[test]
fn scan_filters_non_audio_and_sorts_by_entry_case_insensitive() {
    let dir = tempdir().unwrap();
    let music = dir.path().join("music");
    fs::create_dir_all(&music).unwrap();
    fs::write(music.join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(music.join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(music.join("c.txt"), b"ignore me").unwrap();

    let settings = settings_in(dir.path());
    let tracks = scan(&settings);

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "A");
    assert_eq!(tracks[0].display_name, "A");
    assert_eq!(tracks[1].name, "b");
    assert!(tracks[1].cover_path.ends_with("images/b.jpg"));
}
