//! Light/dark theming.
//!
//! `Theme` selects one of two widget palettes; the choice is persisted as a
//! single value in a state file and restored at startup.

mod model;
mod store;

pub use model::*;
pub use store::{load_theme, resolve_state_path, save_theme};
