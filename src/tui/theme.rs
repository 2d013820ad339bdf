use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{CategoryKey, Tint, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub orange: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub blue: Color,
    pub gray: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    /// Per-category overrides from `[ui.category_colors]`
    pub category_colors: HashMap<CategoryKey, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            orange: Color::Rgb(0xFF, 0x99, 0x33),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            blue: Color::Rgb(0x44, 0x88, 0xFF),
            gray: Color::Rgb(0x99, 0x99, 0xAA),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            category_colors: HashMap::new(),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "orange" => theme.orange = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "purple" => theme.purple = color,
                    "blue" => theme.blue = color,
                    "gray" => theme.gray = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    _ => {}
                }
            }
        }

        // Unknown category keys are ignored
        for (key, value) in &ui.category_colors {
            if let (Ok(category), Some(color)) = (key.parse::<CategoryKey>(), parse_hex_color(value)) {
                theme.category_colors.insert(category, color);
            }
        }

        theme
    }

    /// Terminal color for a display tint
    pub fn tint(&self, tint: Tint) -> Color {
        match tint {
            Tint::Blue => self.blue,
            Tint::Green => self.green,
            Tint::Red => self.red,
            Tint::Purple => self.purple,
            Tint::Yellow => self.yellow,
            Tint::Orange => self.orange,
            Tint::Gray => self.gray,
        }
    }

    /// Color for a category: config override, else its tint
    pub fn category_color(&self, category: CategoryKey) -> Color {
        self.category_colors
            .get(&category)
            .copied()
            .unwrap_or_else(|| self.tint(category.info().color))
    }

    /// Color for a utilization percentage: green, then yellow above 60, red above 85
    pub fn level_color(&self, percent: u8) -> Color {
        match percent {
            0..=60 => self.green,
            61..=85 => self.yellow,
            _ => self.red,
        }
    }
}
