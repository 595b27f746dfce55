//! One-key persistent store for the theme preference.
//!
//! The value is read once at startup and written on every toggle. A missing
//! or unreadable file simply means no stored preference.

use std::{env, fs, path::Path, path::PathBuf};

use super::model::Theme;

/// Resolve the state file path from `VIVACE_STATE_PATH` or XDG defaults
/// (`$XDG_STATE_HOME/vivace/theme`, falling back to
/// `~/.local/state/vivace/theme`).
pub fn resolve_state_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("VIVACE_STATE_PATH") {
        return Some(PathBuf::from(p));
    }

    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("state"))
    } else {
        None
    };

    state_home.map(|d| d.join("vivace").join("theme"))
}

/// Read the persisted theme, if any.
pub fn load_theme(path: &Path) -> Option<Theme> {
    let raw = fs::read_to_string(path).ok()?;
    Theme::parse(&raw)
}

/// Persist the theme. Failures are ignored; losing the preference must not
/// take the player down.
pub fn save_theme(path: &Path, theme: Theme) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(path, theme.as_str());
}
