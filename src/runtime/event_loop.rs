use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, PlaybackAction, PlaybackState, scrub_fraction};
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config;
use crate::theme;
use crate::ui::{self, UiAreas};

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Mouse-sensitive regions from the most recent draw.
    pub areas: UiAreas,
    /// Where the theme preference is persisted on toggle.
    state_path: Option<PathBuf>,
}

impl EventLoopState {
    pub fn new(state_path: Option<PathBuf>) -> Self {
        Self {
            areas: UiAreas::default(),
            state_path,
        }
    }
}

/// Main terminal event loop: syncs playback state from the audio thread,
/// draws, and routes keyboard and mouse input. Returns `Ok(())` when
/// shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        sync_playback(app);

        let mut areas = UiAreas::default();
        terminal.draw(|f| {
            areas = ui::draw(f, app, &settings.ui);
        })?;
        state.areas = areas;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, settings, app, audio_player, state) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(mouse, app, audio_player, &state.areas);
                }
                Event::FocusLost => {
                    // Abnormal end of a scrub gesture: release the drag so a
                    // stray later drag event cannot seek.
                    app.end_scrub();
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Mirror the audio thread's actual state into the model. The playing flag
/// is re-read every iteration, so a playback that failed to start falls back
/// to stopped or paused instead of desynchronizing. Auto-advance moves the
/// highlight along with the playing track.
fn sync_playback(app: &mut App) {
    let Some(handle) = app.playback_handle.as_ref().cloned() else {
        return;
    };
    if let Ok(info) = handle.lock() {
        if let Some(idx) = info.index {
            if idx != app.current && idx < app.tracks.len() {
                app.current = idx;
            }
            // A prepared track that never played (or was wound back to the
            // start) still reads as stopped, not paused.
            app.playback = if info.playing {
                PlaybackState::Playing
            } else if info.elapsed.is_zero() {
                PlaybackState::Stopped
            } else {
                PlaybackState::Paused
            };
        }
    }
}

fn apply_action(action: PlaybackAction, audio_player: &AudioPlayer) {
    match action {
        PlaybackAction::Start(i) => {
            let _ = audio_player.send(AudioCmd::Play(i));
        }
        PlaybackAction::Resume => {
            let _ = audio_player.send(AudioCmd::Resume);
        }
        PlaybackAction::Pause => {
            let _ = audio_player.send(AudioCmd::Pause);
        }
        PlaybackAction::None => {}
    }
}

/// Returns true when the loop should exit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    state: &EventLoopState,
) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Char(' ') => {
            apply_action(app.toggle_playback(), audio_player);
        }
        KeyCode::Left => {
            apply_action(app.previous_track(), audio_player);
        }
        KeyCode::Right => {
            apply_action(app.next_track(), audio_player);
        }
        KeyCode::Up => {
            let v = app.step_volume(settings.controls.volume_step);
            let _ = audio_player.send(AudioCmd::SetVolume(v));
        }
        KeyCode::Down => {
            let v = app.step_volume(-settings.controls.volume_step);
            let _ = audio_player.send(AudioCmd::SetVolume(v));
        }
        KeyCode::Char('t') => {
            let new = app.toggle_theme();
            if let Some(path) = &state.state_path {
                theme::save_theme(path, new);
            }
        }
        _ => {}
    }

    false
}

fn handle_mouse_event(
    mouse: MouseEvent,
    app: &mut App,
    audio_player: &AudioPlayer,
    areas: &UiAreas,
) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if point_in_rect(mouse.column, mouse.row, areas.progress) {
                // Press on the bar seeks immediately and starts the gesture.
                if let Some(target) = app.begin_scrub(mouse.column, areas.progress) {
                    let _ = audio_player.send(AudioCmd::SeekTo(target));
                }
            } else if point_in_rect(mouse.column, mouse.row, areas.playlist) {
                if let Some(idx) = ui::playlist_row_to_index(
                    mouse.row,
                    areas.playlist,
                    areas.playlist_offset,
                    app.tracks.len(),
                ) {
                    apply_action(app.select_from_playlist(idx), audio_player);
                }
            } else if point_in_rect(mouse.column, mouse.row, areas.volume) {
                let level = scrub_fraction(mouse.column, areas.volume) as f32;
                let v = app.set_volume(level);
                let _ = audio_player.send(AudioCmd::SetVolume(v));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            // Drag events arrive terminal-wide, so the gesture keeps working
            // outside the bar; the column clamps to the bar's edges.
            if let Some(target) = app.continue_scrub(mouse.column, areas.progress) {
                let _ = audio_player.send(AudioCmd::SeekTo(target));
            }
        }
        MouseEventKind::Up(_) => {
            app.end_scrub();
        }
        _ => {}
    }
}

fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::audio::PlaybackInfo;
    use crate::library::Track;

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

    fn app_with_info(info: PlaybackInfo) -> App {
        let mut app = App::new(vec![t("hey"), t("summer"), t("ukulele")]);
        app.set_playback_handle(Arc::new(Mutex::new(info)));
        app
    }

    #[test]
    fn prepared_track_still_reads_as_stopped() {
        // Startup loads track 0 without playing it.
        let mut app = app_with_info(PlaybackInfo {
            index: Some(0),
            elapsed: Duration::ZERO,
            playing: false,
        });
        sync_playback(&mut app);
        assert_eq!(app.playback, PlaybackState::Stopped);
    }

    #[test]
    fn paused_mid_track_reads_as_paused() {
        let mut app = app_with_info(PlaybackInfo {
            index: Some(1),
            elapsed: Duration::from_secs(42),
            playing: false,
        });
        sync_playback(&mut app);
        assert_eq!(app.playback, PlaybackState::Paused);
        assert_eq!(app.current, 1);
    }

    #[test]
    fn sync_follows_the_audio_threads_index_and_flag() {
        let mut app = app_with_info(PlaybackInfo {
            index: Some(2),
            elapsed: Duration::from_secs(3),
            playing: true,
        });
        app.playback = PlaybackState::Stopped;
        sync_playback(&mut app);
        assert_eq!(app.current, 2);
        assert_eq!(app.playback, PlaybackState::Playing);
    }
}
