use ratatui::style::{Color, Modifier, Style};

use crate::app::Tone;

/// Catppuccin Mocha-inspired dark theme with 24-bit RGB colors
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub bg_surface: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_muted: Color,

    // Accent colors
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub purple: Color,
    pub teal: Color,

    // UI elements
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Catppuccin Mocha base
            bg: Color::Rgb(30, 30, 46),         // Base
            bg_surface: Color::Rgb(49, 50, 68), // Surface0
            fg: Color::Rgb(205, 214, 244),      // Text
            fg_dim: Color::Rgb(166, 173, 200),  // Subtext0
            fg_muted: Color::Rgb(127, 132, 156), // Overlay0

            // Accent colors
            blue: Color::Rgb(137, 180, 250),   // Blue
            green: Color::Rgb(166, 227, 161),  // Green
            yellow: Color::Rgb(249, 226, 175), // Yellow
            red: Color::Rgb(243, 139, 168),    // Red
            purple: Color::Rgb(203, 166, 247), // Mauve
            teal: Color::Rgb(148, 226, 213),   // Teal

            // UI
            border: Color::Rgb(88, 91, 112),         // Surface2
            selection_bg: Color::Rgb(137, 180, 250), // Blue
            selection_fg: Color::Rgb(30, 30, 46),    // Base
        }
    }
}

impl Theme {
    /// Style for a line of the given tone
    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Plain => Style::default().fg(self.fg),
            Tone::Subtle => Style::default().fg(self.fg_dim),
            Tone::Highlight => Style::default()
                .fg(self.purple)
                .add_modifier(Modifier::BOLD),
            Tone::File => Style::default().fg(self.teal),
            Tone::Success => Style::default().fg(self.green),
            Tone::Warning => Style::default().fg(self.red),
        }
    }

    /// Style for a Yes/No button
    pub fn button(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.selection_fg)
                .bg(self.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg_dim).bg(self.bg_surface)
        }
    }

    /// Style for the character under the input cursor
    pub fn cursor(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .add_modifier(Modifier::REVERSED)
    }
}
