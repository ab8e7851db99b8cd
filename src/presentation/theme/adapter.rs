use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Approximate RGB values of the 16 basic terminal colors.
const ANSI_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
];

/// Conversions between ratatui colors and HSL.
pub struct ColorConverter;

impl ColorConverter {
    /// Converts any ratatui color, resolving named and indexed ones to RGB first.
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => ANSI_16[0],
            Color::Red => ANSI_16[1],
            Color::Green => ANSI_16[2],
            Color::Yellow => ANSI_16[3],
            Color::Blue => ANSI_16[4],
            Color::Magenta => ANSI_16[5],
            Color::Cyan => ANSI_16[6],
            Color::Gray => ANSI_16[7],
            Color::DarkGray => ANSI_16[8],
            Color::LightRed => ANSI_16[9],
            Color::LightGreen => ANSI_16[10],
            Color::LightYellow => ANSI_16[11],
            Color::LightBlue => ANSI_16[12],
            Color::LightMagenta => ANSI_16[13],
            Color::LightCyan => ANSI_16[14],
            Color::Indexed(i) => indexed_to_rgb(i),
            _ => ANSI_16[15],
        };

        Rgb::new(r, g, b).to_hsl()
    }

    /// Converts back to an RGB color.
    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Keeps the hue of `color` and replaces saturation and lightness.
    #[must_use]
    pub fn with_tone(color: Color, saturation: f32, lightness: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.s = saturation;
        hsl.l = lightness;
        Self::to_ratatui(hsl)
    }
}

fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => ANSI_16[usize::from(i)],
        16..=231 => {
            let i = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}
