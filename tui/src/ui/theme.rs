use ratatui::style::{Color, Modifier, Style};

/// Terracotta-on-charcoal palette for the pricing form.
///
/// - warm sand foreground on a charcoal background
/// - teal marks the focused control
/// - green is reserved for the estimate banner
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(24, 24, 28);
    pub const FG_SAND: Color = Color::Rgb(238, 214, 170);
    pub const FG_DIM: Color = Color::Rgb(176, 150, 112);
    pub const FG_MUTED: Color = Color::Rgb(96, 92, 88);

    pub const ACCENT_TERRACOTTA: Color = Color::Rgb(226, 114, 91);
    pub const ACCENT_TEAL: Color = Color::Rgb(64, 200, 190);
    pub const SUCCESS: Color = Color::Rgb(120, 210, 120);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_SAND).bg(Self::BG)
    }

    /// Border of an unfocused control.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Border and labels of the focused control.
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT_TERRACOTTA)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG_SAND)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Estimate banner.
    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Pressed-looking button face.
    pub fn button(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Self::BG)
                .bg(Self::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Self::FG_SAND)
                .bg(Color::Rgb(48, 46, 44))
        }
    }

    /// Italic footer text.
    pub fn disclaimer() -> Style {
        Style::default()
            .fg(Self::FG_DIM)
            .add_modifier(Modifier::ITALIC)
    }
}
