//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player with `ratatui` and reports the screen
//! regions that respond to the mouse (progress bar, playlist, volume bar).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, PlaybackState};
use crate::config::UiSettings;

/// Mouse-sensitive regions reported by the last draw.
#[derive(Debug, Copy, Clone, Default)]
pub struct UiAreas {
    /// The progress bar row; clicks and drags here scrub the track.
    pub progress: Rect,
    /// Inner playlist area; rows map to track indices shifted by
    /// `playlist_offset`.
    pub playlist: Rect,
    /// Scroll offset of the playlist list in the last draw. Non-zero once
    /// the selected track sits below the visible rows.
    pub playlist_offset: usize,
    /// The volume bar row; clicks here set the volume by fraction.
    pub volume: Rect,
}

/// Format a `Duration` as `m:ss` with seconds zero-padded.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Total-duration text. A zero or unknown duration renders nothing, so the
/// label shows no total until the track length is known.
fn total_time_text(total: Option<Duration>) -> Option<String> {
    total.filter(|d| d.as_secs() > 0).map(format_mmss)
}

/// Label for the progress gauge: `elapsed / total`, or bare elapsed when the
/// total is unavailable.
fn progress_label(elapsed: Duration, total: Option<Duration>) -> String {
    match total_time_text(total) {
        Some(t) => format!("{} / {}", format_mmss(elapsed), t),
        None => format_mmss(elapsed),
    }
}

/// Fill ratio for the progress gauge, clamped to [0, 1].
fn progress_ratio(elapsed: Duration, total: Option<Duration>) -> f64 {
    match total {
        Some(t) if !t.is_zero() => (elapsed.as_secs_f64() / t.as_secs_f64()).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

fn playback_status(playback: PlaybackState) -> &'static str {
    match playback {
        PlaybackState::Playing => "Playing (space pauses)",
        PlaybackState::Paused => "Paused (space plays)",
        PlaybackState::Stopped => "Stopped (space plays)",
    }
}

/// Map a click row inside the playlist area to a track index. `offset` is
/// the list's scroll offset from the last draw; the first visible row is the
/// track at that offset, not track 0.
pub fn playlist_row_to_index(row: u16, playlist: Rect, offset: usize, len: usize) -> Option<usize> {
    if row < playlist.y || row >= playlist.y.saturating_add(playlist.height) {
        return None;
    }
    let idx = usize::from(row - playlist.y) + offset;
    (idx < len).then_some(idx)
}

/// Render the entire UI and return the mouse-sensitive regions.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) -> UiAreas {
    let palette = app.theme.palette();

    // Paint the whole frame in the theme's base style first so the palette
    // switch recolors everything, not just the widgets.
    frame.render_widget(Block::default().style(palette.base), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .style(palette.accent)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(" vivace ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now playing: track text plus the progress gauge on the last inner row.
    let now_playing_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .title(" now playing ")
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        });
    let now_playing_inner = now_playing_block.inner(chunks[1]);
    frame.render_widget(now_playing_block, chunks[1]);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(now_playing_inner);

    let elapsed = app
        .playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok())
        .map(|info| info.elapsed)
        .unwrap_or(Duration::ZERO);

    let text = match app.current_track() {
        Some(track) => format!(
            "Track:  {}\nArtist: {}\nCover:  {}\nStatus: {}",
            track.display_name,
            track.artist,
            track.cover_path.display(),
            playback_status(app.playback),
        ),
        None => "No tracks found".to_string(),
    };
    frame.render_widget(
        Paragraph::new(text).style(palette.base).wrap(Wrap { trim: true }),
        inner[0],
    );

    let total = app.current_duration();
    let progress = Gauge::default()
        .gauge_style(palette.gauge_fill)
        .ratio(progress_ratio(elapsed, total))
        .label(progress_label(elapsed, total))
        .use_unicode(true);
    frame.render_widget(progress, inner[1]);

    // Playlist: one row per track, the active entry highlighted.
    let playlist_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .title(" playlist ");
    let playlist_inner = playlist_block.inner(chunks[2]);

    let items: Vec<ListItem> = app
        .tracks
        .iter()
        .map(|t| ListItem::new(t.playlist_entry()))
        .collect();
    let list = List::new(items)
        .block(playlist_block)
        .style(palette.base)
        .highlight_style(palette.highlight)
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if app.has_tracks() {
        state.select(Some(app.current));
    }
    frame.render_stateful_widget(list, chunks[2], &mut state);
    // The render scrolls the list to keep the selected row visible; the
    // resulting offset is needed to map click rows back to track indices.
    let playlist_offset = state.offset();

    // Volume
    let volume_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .title(" volume ");
    let volume_inner = volume_block.inner(chunks[3]);
    frame.render_widget(volume_block, chunks[3]);
    let volume = Gauge::default()
        .gauge_style(palette.gauge_fill)
        .ratio(f64::from(app.volume.clamp(0.0, 1.0)))
        .label(format!("{}%", (app.volume * 100.0).round() as u32));
    frame.render_widget(volume, volume_inner);

    // Footer
    let theme_label = match app.theme {
        crate::theme::Theme::Light => "dark",
        crate::theme::Theme::Dark => "light",
    };
    let footer_text = format!(
        "[space] play/pause | [←/→] prev/next | [↑/↓] volume | [t] {} theme | [q] quit | click/drag the bar to seek",
        theme_label
    );
    let footer = Paragraph::new(footer_text)
        .style(palette.base)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    UiAreas {
        progress: inner[1],
        playlist: playlist_inner,
        playlist_offset,
        volume: volume_inner,
    }
}
