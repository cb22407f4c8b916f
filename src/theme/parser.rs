//! Palette value parsing utilities

use ratatui::style::Color;
use std::str::FromStr;

/// Error type for color parsing failures
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color format: {0}")]
    InvalidHex(String),
    #[error("Not a color value: {0}")]
    NotAColor(String),
}

/// Parse a palette value into a terminal color.
///
/// Accepts `#RRGGBB`, `#RGB`, `transparent` (the terminal default) and the
/// ANSI color names known to ratatui (`red`, `light-blue`, ...).
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let input = input.trim();

    if input.starts_with('#') {
        return parse_hex_color(input);
    }

    match input.to_lowercase().as_str() {
        "transparent" | "reset" => Ok(Color::Reset),
        _ => Color::from_str(input).map_err(|_| ColorParseError::NotAColor(input.to_string())),
    }
}

/// Parse hex color in format #RRGGBB or #RGB
fn parse_hex_color(hex: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(hex.to_string());
    if !hex[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    match hex.len() {
        7 => Ok(Color::Rgb(channel(1..3)?, channel(3..5)?, channel(5..7)?)),
        // 17 = 255/15
        4 => Ok(Color::Rgb(
            channel(1..2)? * 17,
            channel(2..3)? * 17,
            channel(3..4)? * 17,
        )),
        _ => Err(invalid()),
    }
}

/// Approximates `fg` drawn with the given opacity over `bg`.
///
/// Terminals have no alpha channel, so the two colors are mixed instead.
/// Non-RGB colors are returned unchanged.
pub fn with_opacity(alpha: f32, fg: Color, bg: Color) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (f as f32 * alpha + b as f32 * (1.0 - alpha)).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#CED4DA").unwrap(), Color::Rgb(206, 212, 218));
        assert_eq!(parse_color("#d3d3d3").unwrap(), Color::Rgb(211, 211, 211));
        assert_eq!(parse_color("#f00").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color(" #16161D ").unwrap(), Color::Rgb(22, 22, 29));
    }

    #[test]
    fn test_parse_transparent() {
        assert_eq!(parse_color("transparent").unwrap(), Color::Reset);
        assert_eq!(parse_color("TRANSPARENT").unwrap(), Color::Reset);
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("red").unwrap(), Color::Red);
        assert_eq!(parse_color("light-blue").unwrap(), Color::LightBlue);
    }

    #[test]
    fn test_invalid_colors() {
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("#ff00").is_err());
        assert!(parse_color("#ffé00").is_err());
        assert!(parse_color("#+1+2+3").is_err());
        assert!(parse_color("#+f0").is_err());
        assert_eq!(
            parse_color("atom-one-dark"),
            Err(ColorParseError::NotAColor("atom-one-dark".to_string()))
        );
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_with_opacity_mixes_rgb() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(with_opacity(1.0, fg, bg), fg);
        assert_eq!(with_opacity(0.0, fg, bg), bg);
        assert_eq!(with_opacity(0.5, fg, bg), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_with_opacity_keeps_non_rgb() {
        assert_eq!(
            with_opacity(0.5, Color::Gray, Color::Rgb(0, 0, 0)),
            Color::Gray
        );
    }
}
