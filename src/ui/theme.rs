//! Theme: dark canvas, accent selection, status colours for shows.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas.
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Header, input bar, status, palette.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Primary accent (prompt, selection bar).
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    pub const ACCENT_SOFT: Color = Color::Rgb(0x99, 0xd4, 0xff);
    /// Selected palette row background.
    pub const ACCENT_GLOW: Color = Color::Rgb(0x1e, 0x2d, 0x3d);
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    pub const WARNING: Color = Color::Rgb(0xf5, 0xb9, 0x4a);
    pub const ERROR: Color = Color::Rgb(0xf0, 0x6c, 0x6c);

    pub const CONFIRMED: Color = Color::Rgb(0x4a, 0xde, 0x80);
    pub const PENDING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
    pub const OFFER: Color = Color::Rgb(0x3b, 0x82, 0xf6);
    pub const OTHER: Color = Color::Rgb(0x6b, 0x72, 0x80);

    /// Dot colour for a show status.
    pub fn status(status: &str) -> Color {
        match status.to_ascii_lowercase().as_str() {
            "confirmed" => CONFIRMED,
            "pending" => PENDING,
            "offer" => OFFER,
            _ => OTHER,
        }
    }
}

pub mod styles {
    use super::colors;
    use ratatui::style::{Modifier, Style};

    pub fn border() -> Style {
        Style::default().fg(colors::BORDER)
    }
    pub fn accent_bold() -> Style {
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
    }
    pub fn text() -> Style {
        Style::default().fg(colors::TEXT)
    }
    pub fn text_dim() -> Style {
        Style::default().fg(colors::TEXT_DIM)
    }
    pub fn muted() -> Style {
        Style::default().fg(colors::MUTED)
    }
    pub fn elevated_bg() -> Style {
        Style::default().bg(colors::ELEVATED)
    }
}

pub const HEADER_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;
pub const MIN_BODY_LINES: u16 = 6;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
/// Percentage of body width given to the show list.
pub const SHOWS_WIDTH_PCT: u16 = 62;
pub const PALETTE_MAX_WIDTH: u16 = 80;
/// Two lines per result plus borders and footer.
pub const PALETTE_MAX_HEIGHT: u16 = 24;
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
