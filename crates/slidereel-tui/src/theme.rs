use ratatui::style::{Color, Modifier, Style};

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey2: Color,

    // Semantic colors
    pub card_border: Color,
    pub card_active: Color,
    pub caption: Color,
    pub indicator: Color,
    pub indicator_active: Color,
    pub button: Color,
    pub button_hover: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            card_border: Color::Rgb(0x7c, 0x6f, 0x64),
            card_active: Color::Rgb(0xd8, 0xa6, 0x57),
            caption: Color::Rgb(0x89, 0xb4, 0x82),
            indicator: Color::Rgb(0x50, 0x49, 0x45),
            indicator_active: Color::Rgb(0xe7, 0x8a, 0x4e),
            button: Color::Rgb(0x7d, 0xae, 0xa3),
            button_hover: Color::Rgb(0xd3, 0x86, 0x9b),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

impl Theme {
    pub fn status(&self) -> Style {
        Style::default().fg(self.fg0).bg(self.bg2)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.grey2).bg(self.bg2)
    }

    /// Caption style; fading captions are dimmed
    pub fn caption(&self, fading: bool) -> Style {
        let style = Style::default().fg(self.caption);
        if fading {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}
