use ratatui::style::{Color, Modifier, Style};

/// Clinic theme: white on slate with a teal accent.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(18, 24, 32);
    pub const FG: Color = Color::Rgb(235, 240, 245);
    pub const FG_DIM: Color = Color::Rgb(150, 165, 180);
    pub const FG_MUTED: Color = Color::Rgb(85, 98, 112);

    pub const ACCENT_TEAL: Color = Color::Rgb(0, 190, 170);
    pub const ACCENT_AMBER: Color = Color::Rgb(255, 190, 60);
    pub const ACCENT_RED: Color = Color::Rgb(255, 90, 90);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Border of the focused panel or field.
    pub fn border_focus() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Selected row.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }
}
