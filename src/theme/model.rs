use ratatui::style::{Color, Modifier, Style};

/// The two visual palettes. Persisted as the literal strings `"light"`
/// and `"dark"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Unknown values are treated as absent.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                base: Style::default().fg(Color::Black).bg(Color::White),
                border: Style::default().fg(Color::DarkGray).bg(Color::White),
                accent: Style::default().fg(Color::Blue).bg(Color::White),
                highlight: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                gauge_fill: Style::default().fg(Color::Blue).bg(Color::Gray),
            },
            Self::Dark => Palette {
                base: Style::default().fg(Color::Gray).bg(Color::Black),
                border: Style::default().fg(Color::DarkGray).bg(Color::Black),
                accent: Style::default().fg(Color::Cyan).bg(Color::Black),
                highlight: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                gauge_fill: Style::default().fg(Color::Cyan).bg(Color::DarkGray),
            },
        }
    }
}

/// Widget styles derived from the active theme.
pub struct Palette {
    pub base: Style,
    pub border: Style,
    pub accent: Style,
    pub highlight: Style,
    pub gauge_fill: Style,
}
