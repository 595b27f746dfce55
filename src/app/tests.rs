use std::path::PathBuf;
use std::time::Duration;

use ratatui::layout::Rect;

use super::*;
use crate::library::Track;
use crate::theme::Theme;

fn t(name: &str) -> Track {
    Track {
        name: name.into(),
        display_name: name.into(),
        artist: "Purrple Cat".into(),
        audio_path: PathBuf::from(format!("music/{name}.mp3")),
        cover_path: PathBuf::from(format!("images/{name}.jpg")),
        duration: None,
    }
}

fn sample_app() -> App {
    App::new(vec![t("hey"), t("summer"), t("ukulele")])
}

const BAR: Rect = Rect {
    x: 10,
    y: 5,
    width: 50,
    height: 1,
};

#[test]
fn next_wraps_from_last_index_to_zero() {
    let mut app = sample_app();
    app.current = 2;
    assert_eq!(app.next_track(), PlaybackAction::Start(0));
    assert_eq!(app.current, 0);
    assert_eq!(app.playback, PlaybackState::Playing);
}

#[test]
fn previous_wraps_from_zero_to_last_index() {
    let mut app = sample_app();
    assert_eq!(app.previous_track(), PlaybackAction::Start(2));
    assert_eq!(app.current, 2);
}

#[test]
fn toggle_playback_is_a_pure_toggle() {
    let mut app = sample_app();

    // From Stopped the first toggle starts the current track.
    assert_eq!(app.toggle_playback(), PlaybackAction::Start(0));
    assert_eq!(app.playback, PlaybackState::Playing);

    assert_eq!(app.toggle_playback(), PlaybackAction::Pause);
    assert_eq!(app.playback, PlaybackState::Paused);

    // Two toggles from a stable state land back where they started.
    assert_eq!(app.toggle_playback(), PlaybackAction::Resume);
    assert_eq!(app.toggle_playback(), PlaybackAction::Pause);
    assert_eq!(app.playback, PlaybackState::Paused);
}

#[test]
fn toggle_playback_on_empty_playlist_does_nothing() {
    let mut app = App::new(Vec::new());
    assert_eq!(app.toggle_playback(), PlaybackAction::None);
    assert_eq!(app.playback, PlaybackState::Stopped);
}

#[test]
fn selecting_the_active_entry_is_a_no_op() {
    let mut app = sample_app();
    app.current = 1;
    app.playback = PlaybackState::Playing;

    assert_eq!(app.select_from_playlist(1), PlaybackAction::None);
    assert_eq!(app.current, 1);
    assert_eq!(app.playback, PlaybackState::Playing);
}

#[test]
fn selecting_another_entry_switches_and_plays() {
    let mut app = sample_app();
    assert_eq!(app.select_from_playlist(2), PlaybackAction::Start(2));
    assert_eq!(app.current, 2);
    assert_eq!(app.playback, PlaybackState::Playing);

    // Out-of-range rows are ignored.
    assert_eq!(app.select_from_playlist(99), PlaybackAction::None);
    assert_eq!(app.current, 2);
}

#[test]
fn scrub_fraction_clamps_to_bar_edges() {
    // Left of the bar.
    assert_eq!(scrub_fraction(0, BAR), 0.0);
    assert_eq!(scrub_fraction(10, BAR), 0.0);
    // Past the right edge.
    assert_eq!(scrub_fraction(200, BAR), 1.0);
    // Middle of the bar.
    assert_eq!(scrub_fraction(35, BAR), 0.5);
}

#[test]
fn seek_target_skips_unknown_or_zero_duration() {
    assert_eq!(seek_target(0.5, None), None);
    assert_eq!(seek_target(0.5, Some(Duration::ZERO)), None);
    assert_eq!(
        seek_target(0.5, Some(Duration::from_secs(120))),
        Some(Duration::from_secs(60))
    );
    // Fraction 1.0 never seeks past the end.
    assert_eq!(
        seek_target(1.0, Some(Duration::from_secs(120))),
        Some(Duration::from_secs(120))
    );
}

#[test]
fn scrub_gesture_requires_begin_before_continue() {
    let mut app = sample_app();
    app.tracks[0].duration = Some(Duration::from_secs(100));

    // No gesture in progress: continue is a no-op.
    assert_eq!(app.continue_scrub(35, BAR), None);
    assert!(!app.dragging);

    // Begin seeks immediately, even before any movement.
    let target = app.begin_scrub(35, BAR);
    assert!(app.dragging);
    assert_eq!(target, Some(Duration::from_secs(50)));

    // Dragging past the right edge pins to the end.
    assert_eq!(app.continue_scrub(200, BAR), Some(Duration::from_secs(100)));

    app.end_scrub();
    assert!(!app.dragging);
    assert_eq!(app.continue_scrub(35, BAR), None);
}

#[test]
fn scrub_with_unknown_duration_still_begins_the_gesture() {
    let mut app = sample_app();
    assert_eq!(app.begin_scrub(35, BAR), None);
    assert!(app.dragging);
}

#[test]
fn volume_steps_clamp_to_unit_range() {
    let mut app = sample_app();
    app.volume = 0.95;
    assert_eq!(app.step_volume(0.1), 1.0);
    app.volume = 0.05;
    assert_eq!(app.step_volume(-0.1), 0.0);
    assert_eq!(app.set_volume(0.5), 0.5);
    assert_eq!(app.set_volume(7.0), 1.0);
}

#[test]
fn theme_toggle_flips_and_reports_new_value() {
    let mut app = sample_app();
    assert_eq!(app.theme, Theme::Light);
    assert_eq!(app.toggle_theme(), Theme::Dark);
    assert_eq!(app.toggle_theme(), Theme::Light);
}
