use ratatui::style::{Color, Modifier, Style};

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub yellow: Color,
    pub green: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_fg: Color::Rgb(0xDA, 0xB8, 0xF0),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults.
    /// Unknown slots and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "purple" => theme.purple = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_fg" => theme.selection_fg = color,
                _ => tracing::warn!(slot = %key, "ignoring unknown color slot"),
            }
        }

        theme
    }

    /// Style for a task name: done tasks are dimmed and struck through
    pub fn name_style(&self, done: bool, bg: Color) -> Style {
        if done {
            Style::default()
                .fg(self.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(self.text_bright).bg(bg)
        }
    }

    /// Checkbox color
    pub fn check_color(&self, done: bool) -> Color {
        if done { self.green } else { self.text }
    }
}
