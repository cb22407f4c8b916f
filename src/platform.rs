// platform.rs

//! Brightness preference reported by the host terminal.

use log::*;

/// Reads the terminal brightness from `COLORFGBG`, falling back to `light`.
pub fn brightness() -> String {
    let value = std::env::var("COLORFGBG").ok();
    let brightness = brightness_from_colorfgbg(value.as_deref());
    debug!("COLORFGBG={:?}, brightness {}", value, brightness);
    brightness.to_string()
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). Background indices
/// 0 to 6 and 8 are the dark ANSI colors.
pub(crate) fn brightness_from_colorfgbg(value: Option<&str>) -> &'static str {
    let bg = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match bg {
        Some(0..=6) | Some(8) => "dark",
        _ => "light",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_from_colorfgbg() {
        assert_eq!(brightness_from_colorfgbg(Some("15;0")), "dark");
        assert_eq!(brightness_from_colorfgbg(Some("15;default;8")), "dark");
        assert_eq!(brightness_from_colorfgbg(Some("0;15")), "light");
        assert_eq!(brightness_from_colorfgbg(Some("0;7")), "light");
        assert_eq!(brightness_from_colorfgbg(Some("garbage")), "light");
        assert_eq!(brightness_from_colorfgbg(None), "light");
    }
}
