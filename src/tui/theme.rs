use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::task::Category;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Cursor row and focused widget border
    pub highlight: Color,
    /// Title bar
    pub header: Color,
    /// "ADD NEW TASK" section
    pub input: Color,
    /// "YOUR TASKS" bar and table headings
    pub list_header: Color,
    /// Counter row
    pub counter: Color,
    pub completed: Color,
    pub pending: Color,
    pub button: Color,
    pub button_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x12, 0x18),
            text: Color::Rgb(0xE0, 0xE0, 0xE0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x80, 0x80, 0x8C),
            highlight: Color::Rgb(0x2E, 0x3A, 0x55),
            header: Color::Rgb(0x4A, 0x90, 0xE2),
            input: Color::Rgb(0x50, 0xE3, 0xC2),
            list_header: Color::Rgb(0xF5, 0xA6, 0x23),
            counter: Color::Rgb(0xB8, 0xE9, 0x86),
            completed: Color::Rgb(0x7E, 0xD3, 0x21),
            pending: Color::Rgb(0xFF, 0x6B, 0x6B),
            button: Color::Rgb(0xFF, 0xFF, 0xFF),
            button_text: Color::Rgb(0x00, 0x00, 0x00),
        }
    }
}

/// Parse a hex color string like "#FF6B6B" into an RGB Color
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
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "highlight" => theme.highlight = color,
                "header" => theme.header = color,
                "input" => theme.input = color,
                "list_header" => theme.list_header = color,
                "counter" => theme.counter = color,
                "completed" => theme.completed = color,
                "pending" => theme.pending = color,
                "button" => theme.button = color,
                "button_text" => theme.button_text = color,
                _ => tracing::warn!(key = %key, "unknown color slot"),
            }
        }

        theme
    }

    /// Foreground color for a row category
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Pending => self.pending,
            Category::Completed => self.completed,
        }
    }
}
