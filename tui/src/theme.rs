//! Color theme for the Quartet TUI.
//!
//! Kanagawa Wave palette, trimmed to what the grid needs.

use ratatui::style::{Color, Modifier, Style};

use crate::WordStatus;

mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Accents ===
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
    pub const VIOLET: Color = Color::Rgb(149, 127, 184); // oniViolet
}

/// Resolved theme palette used by the grid UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub selected: Color,
    pub correct: Color,
    pub warning: Color,
    pub error: Color,
    pub accent: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            selected: colors::BLUE,
            correct: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
            accent: colors::VIOLET,
        }
    }

    /// Tile style for a word in the given state.
    #[must_use]
    pub fn tile(&self, status: WordStatus) -> Style {
        match status {
            WordStatus::Correct => Style::default()
                .fg(self.correct)
                .add_modifier(Modifier::DIM),
            WordStatus::Selected => Style::default()
                .fg(self.selected)
                .add_modifier(Modifier::BOLD),
            WordStatus::Normal => Style::default().fg(self.text_primary),
        }
    }
}

#[must_use]
pub fn palette() -> Palette {
    Palette::standard()
}
