//! Accent color and the styles derived from it.

/// Color space helpers.
pub mod adapter;

use adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Card background of regular components.
const ITEM_BASE: Color = Color::Rgb(0xD0, 0xE4, 0xFF);
/// Card background of highlighted components.
const HIGHLIGHT_BASE: Color = Color::Rgb(0xFF, 0xD5, 0xD5);

/// Styles derived from the accent color.
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)]
pub struct Theme {
    pub accent: Color,
    pub title_style: Style,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub item_style: Style,
    pub highlight_item_style: Style,
    pub highlight_title_style: Style,
    pub button_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Blue")
    }
}

impl Theme {
    /// Builds a theme from a color name or hex code. Unknown values fall back to blue.
    #[must_use]
    pub fn new(accent_color: &str) -> Self {
        Self::from_color(parse_color(accent_color))
    }

    /// Builds a theme around `accent`.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = ColorConverter::with_tone(accent, 0.5, 0.3);

        Self {
            accent,
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selection_style: Style::default()
                .bg(selection_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            item_style: Style::default()
                .bg(ColorConverter::with_tone(ITEM_BASE, 0.4, 0.15))
                .fg(Color::White),
            highlight_item_style: Style::default()
                .bg(ColorConverter::with_tone(HIGHLIGHT_BASE, 0.4, 0.15))
                .fg(Color::White),
            highlight_title_style: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            button_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Parses a color name or `#rgb`/`#rrggbb` code, falling back to blue.
fn parse_color(s: &str) -> Color {
    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Blue,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let short = |i: usize| channel(&s[i..=i]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Red", Color::Red ; "named")]
    #[test_case("blue", Color::Blue ; "lowercase")]
    #[test_case("#FF0000", Color::Rgb(255, 0, 0) ; "hex6")]
    #[test_case("#0f0", Color::Rgb(0, 255, 0) ; "hex3")]
    #[test_case("Orange", Color::Indexed(208) ; "orange")]
    #[test_case("Invalid", Color::Blue ; "fallback")]
    #[test_case("#12", Color::Blue ; "bad_hex")]
    fn test_parse_color(input: &str, expected: Color) {
        assert_eq!(parse_color(input), expected);
    }

    #[test]
    fn test_theme_uses_accent() {
        let theme = Theme::new("#B56D07");
        assert_eq!(theme.accent, Color::Rgb(0xB5, 0x6D, 0x07));
        assert_eq!(theme.title_style.fg, Some(theme.accent));
        assert_eq!(theme.button_style.bg, Some(theme.accent));
    }
}
